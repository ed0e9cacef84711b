/// Core evaluation logic.
///
/// Contains the recursive tree walk and the evaluator result type.
pub mod core;

/// Binary operator evaluation.
///
/// Implements checked addition and subtraction shared by the tree evaluator
/// and the fused expression processor.
pub mod binary;
