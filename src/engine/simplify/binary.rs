use crate::{
    ast::{BinaryOperator, Expr},
    engine::simplify::FoldResult,
    error::FoldError,
};

/// Evaluates a binary operator over two numeric operands.
///
/// Arithmetic follows IEEE-754 double semantics: division by zero yields an
/// infinity or NaN rather than an error. Comparisons yield an
/// [`Expr::Boolean`]. The statement operators `=` and `:=` have no numeric
/// meaning and are rejected.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Example
/// ```
/// use formula::{
///     ast::{BinaryOperator, Expr},
///     engine::simplify::binary::fold_binary,
/// };
///
/// assert_eq!(fold_binary(BinaryOperator::Mul, 1.5, 2.0, 1).unwrap(),
///            Expr::Number(3.0));
/// assert_eq!(fold_binary(BinaryOperator::Less, 1.0, 2.0, 1).unwrap(),
///            Expr::Boolean(true));
/// assert!(fold_binary(BinaryOperator::Assign, 1.0, 2.0, 1).is_err());
/// ```
#[allow(clippy::float_cmp)]
pub fn fold_binary(op: BinaryOperator, left: f64, right: f64, line: usize) -> FoldResult<Expr> {
    use BinaryOperator::{
        Add, Assign, Connect, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual,
        Sub,
    };

    Ok(match op {
        Add => Expr::Number(left + right),
        Sub => Expr::Number(left - right),
        Mul => Expr::Number(left * right),
        Div => Expr::Number(left / right),
        Equal => Expr::Boolean(left == right),
        NotEqual => Expr::Boolean(left != right),
        Greater => Expr::Boolean(left > right),
        GreaterEqual => Expr::Boolean(left >= right),
        Less => Expr::Boolean(left < right),
        LessEqual => Expr::Boolean(left <= right),
        Assign | Connect => return Err(FoldError::NotFoldable { op, line }),
    })
}
