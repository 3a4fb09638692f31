use crate::ast::{Expr, UnaryOperator};

/// Evaluates a unary operator over a numeric operand.
///
/// # Example
/// ```
/// use formula::{
///     ast::{Expr, UnaryOperator},
///     engine::simplify::unary::fold_unary,
/// };
///
/// assert_eq!(fold_unary(UnaryOperator::Negate, 2.0), Expr::Number(-2.0));
/// ```
#[must_use]
pub fn fold_unary(op: UnaryOperator, value: f64) -> Expr {
    match op {
        UnaryOperator::Negate => Expr::Number(-value),
    }
}
