/// Parser entry points and the shared result type.
///
/// Walks a token slice level by level, recursing into parenthesised groups,
/// and assembles an owned [`Expr`](crate::ast::Expr) tree.
pub mod core;

/// Binary expression assembly.
///
/// Tracks the left operand and pending operator for one nesting level and
/// folds complete operations to the left.
pub mod binary;

/// Parenthesis matching.
///
/// Locates the `)` that closes a `(`, either depth-balanced or with the naive
/// first-close scan.
pub mod group;
