/// Parsing errors.
///
/// Defines the syntax errors that make a parse call fail: unexpected tokens,
/// missing parentheses, a missing statement operator, trailing input, and the
/// assignment-shape check offered to callers.
pub mod parse_error;
/// Folding errors.
///
/// Raised when the simplifier is asked to evaluate an operator that has no
/// numeric meaning, such as a statement operator reached with two numeric
/// operands.
pub mod fold_error;
/// Recoverable lexical diagnostics.
///
/// Illegal characters and oversized numeric literals are reported here and
/// never abort tokenization.
pub mod lex_diagnostic;

pub use fold_error::FoldError;
pub use lex_diagnostic::LexDiagnostic;
pub use parse_error::ParseError;
