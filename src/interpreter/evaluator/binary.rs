use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Applies a binary operator to two integers.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Operator position for error reporting.
///
/// # Example
/// ```
/// use sumexpr::{ast::BinaryOperator, interpreter::evaluator::binary::eval_binary};
///
/// assert_eq!(eval_binary(BinaryOperator::Add, 3, 4, 1).unwrap(), 7);
/// assert!(eval_binary(BinaryOperator::Add, i64::MAX, 1, 1).is_err());
/// ```
pub fn eval_binary(op: BinaryOperator, left: i64, right: i64, position: usize) -> EvalResult<i64> {
    let result = match op {
        BinaryOperator::Add => left.checked_add(right),
        BinaryOperator::Sub => left.checked_sub(right),
    };
    result.ok_or(RuntimeError::Overflow { position })
}
