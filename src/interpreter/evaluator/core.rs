use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::evaluator::binary::eval_binary,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A unit of pending work in the post-order walk.
enum Step<'a> {
    Visit(&'a Expr),
    Apply(BinaryOperator, usize),
}

/// Evaluates an expression tree to an integer.
///
/// The walk is pure: evaluating the same tree twice yields the same result.
/// It keeps its own work stack, so the depth of the tree is not limited by
/// the call stack.
///
/// # Errors
/// `Overflow` if an intermediate result does not fit into an `i64`.
///
/// # Example
/// ```
/// use sumexpr::{
///     ast::{BinaryOperator, Expr},
///     interpreter::evaluator::core::evaluate,
/// };
///
/// let expr = Expr::BinaryOp { op:       BinaryOperator::Sub,
///                             left:     Box::new(Expr::Literal { value:    10,
///                                                                position: 0, }),
///                             right:    Box::new(Expr::Literal { value:    4,
///                                                                position: 3, }),
///                             position: 2, };
///
/// assert_eq!(evaluate(&expr).unwrap(), 6);
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<i64> {
    let mut steps = vec![Step::Visit(expr)];
    let mut values: Vec<i64> = Vec::new();

    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(Expr::Literal { value, .. }) => values.push(*value),
            Step::Visit(Expr::BinaryOp { op,
                                         left,
                                         right,
                                         position, }) => {
                steps.push(Step::Apply(*op, *position));
                steps.push(Step::Visit(&**right));
                steps.push(Step::Visit(&**left));
            },
            Step::Apply(op, position) => {
                let (Some(right), Some(left)) = (values.pop(), values.pop()) else {
                    unreachable!("both operands are evaluated before their operator")
                };
                values.push(eval_binary(op, left, right, position)?);
            },
        }
    }

    let [value] = values[..] else {
        unreachable!("a tree evaluates to exactly one value")
    };
    Ok(value)
}
