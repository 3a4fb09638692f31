use crate::ast::BinaryOperator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while folding constants.
pub enum FoldError {
    /// Both operands are numbers but the operator has no numeric meaning.
    NotFoldable {
        /// The offending operator (`=` or `:=`).
        op:   BinaryOperator,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for FoldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFoldable { op, line } => write!(f,
                                                     "Error on line {line}: Operator '{op}' cannot be applied to two numbers."),
        }
    }
}

impl std::error::Error for FoldError {}
