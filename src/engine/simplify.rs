/// Binary operator folding.
///
/// The explicit table mapping each operator to its numeric or boolean
/// meaning.
pub mod binary;

/// Unary operator folding.
pub mod unary;

use crate::{
    ast::{Expr, Formula},
    engine::simplify::{binary::fold_binary, unary::fold_unary},
    error::FoldError,
};

pub type FoldResult<T> = Result<T, FoldError>;

/// Folds constant numeric subexpressions.
///
/// Folding is depth-first and bottom-up: both children are folded first, and
/// a node whose folded children are both numbers is replaced by its value.
/// `1 + 2 * 3` first becomes `1 + 6.0`, then `7.0`. Nodes with a symbol or
/// string operand keep their shape with folded children. The input is never
/// modified; a new tree is returned.
///
/// Folding a folded tree returns an equal tree.
///
/// # Errors
/// Returns [`FoldError::NotFoldable`] when `=` or `:=` is reached with two
/// numeric operands.
///
/// # Example
/// ```
/// use formula::{ast::Expr, engine::simplify::simplify};
///
/// let formula = formula::parse("x = (2 + 3) * 4").unwrap();
///
/// assert_eq!(simplify(&formula.value).unwrap(), Expr::Number(20.0));
/// ```
pub fn simplify(expr: &Expr) -> FoldResult<Expr> {
    match expr {
        Expr::BinaryOp { left, op, right, line } => {
            let left = simplify(left)?;
            let right = simplify(right)?;
            if let (Some(l), Some(r)) = (left.as_number(), right.as_number()) {
                return fold_binary(*op, l, r, *line);
            }
            Ok(Expr::binary(left, *op, right, *line))
        },
        Expr::UnaryOp { op, expr, line } => {
            let inner = simplify(expr)?;
            if let Some(value) = inner.as_number() {
                return Ok(fold_unary(*op, value));
            }
            Ok(Expr::UnaryOp { op:   *op,
                               expr: Box::new(inner),
                               line: *line, })
        },
        Expr::Symbol(_) | Expr::Number(_) | Expr::Str(_) | Expr::Boolean(_) => Ok(expr.clone()),
    }
}

impl Formula {
    /// Returns a copy of the statement with its right-hand side folded.
    ///
    /// The statement operator itself is never evaluated, and the target is
    /// always a symbol, so this cannot fail: `=` and `:=` never appear below
    /// the top level of a parsed formula.
    ///
    /// # Example
    /// ```
    /// use formula::ast::Expr;
    ///
    /// let folded = formula::parse("x = 1 + 2 * 3").unwrap().simplify();
    ///
    /// assert_eq!(folded.value, Expr::Number(7.0));
    /// ```
    #[must_use]
    pub fn simplify(&self) -> Self {
        let value = match simplify(&self.value) {
            Ok(value) => value,
            Err(e) => {
                // Only reachable for hand-built trees.
                log::debug!("{e}; right-hand side left unfolded");
                self.value.clone()
            },
        };
        log::trace!("folded {} to {value}", self.value);

        Self { op: self.op,
               target: self.target.clone(),
               value,
               line: self.line }
    }
}
