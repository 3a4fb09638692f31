use crate::ast::{Expr, Symbol};

/// Collects the symbol leaves of an expression in left-to-right order.
///
/// The left operand is visited before the right one; duplicates are kept.
/// A bare symbol yields itself; number, string and boolean leaves yield
/// nothing.
///
/// # Example
/// ```
/// use formula::engine::symbols::collect_symbols;
///
/// let formula = formula::parse("y = a * 2 + (b - -a)").unwrap();
/// let names: Vec<_> = collect_symbols(&formula.value).iter()
///                                                   .map(|s| s.name())
///                                                   .collect();
///
/// assert_eq!(names, ["a", "b", "a"]);
/// ```
#[must_use]
pub fn collect_symbols(expr: &Expr) -> Vec<&Symbol> {
    let mut buf = Vec::new();
    collect_into(expr, &mut buf);
    buf
}

/// Like [`collect_symbols`], but clones the symbols so the result outlives
/// the tree.
#[must_use]
pub fn collect_symbols_owned(expr: &Expr) -> Vec<Symbol> {
    collect_symbols(expr).into_iter().cloned().collect()
}

fn collect_into<'a>(expr: &'a Expr, buf: &mut Vec<&'a Symbol>) {
    match expr {
        Expr::BinaryOp { left, right, .. } => {
            collect_into(left, buf);
            collect_into(right, buf);
        },
        Expr::UnaryOp { expr, .. } => collect_into(expr, buf),
        Expr::Symbol(symbol) => buf.push(symbol),
        Expr::Number(_) | Expr::Str(_) | Expr::Boolean(_) => {},
    }
}
