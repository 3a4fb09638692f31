use crate::{ast::BinaryOperator, engine::parser::core::MAX_DEPTH};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a formula.
pub enum ParseError {
    /// Found an unexpected token while parsing an expression.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The statement did not start with a name.
    ExpectedTarget {
        /// The token found instead.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The target name was not followed by a statement operator.
    ExpectedStatementOperator {
        /// The token found instead.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Found extra tokens after the statement was complete.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Parentheses, unary minuses or operator chains nest deeper than the
    /// parser allows.
    NestingTooDeep {
        /// The source line where the limit was passed.
        line: usize,
    },
    /// The statement is well formed but is not a plain `=` assignment.
    NotAnAssignment {
        /// The statement operator that was found.
        op:   BinaryOperator,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// The line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::ExpectedClosingParen { line }
            | Self::ExpectedTarget { line, .. }
            | Self::ExpectedStatementOperator { line, .. }
            | Self::UnexpectedTrailingTokens { line, .. }
            | Self::NestingTooDeep { line }
            | Self::NotAnAssignment { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { line } => write!(f,
                                                          "Error on line {line}: Expected closing parenthesis ')' but none found."),

            Self::ExpectedTarget { token, line } => write!(f,
                                                           "Error on line {line}: A formula must start with a name, found {token}."),

            Self::ExpectedStatementOperator { token, line } => write!(f,
                                                                      "Error on line {line}: Expected one of = := == != > >= < <= after the target, found {token}."),

            Self::UnexpectedTrailingTokens { token, line } => write!(f,
                                                                     "Error on line {line}: Extra tokens after expression. Check your input: {token}"),

            Self::NestingTooDeep { line } => write!(f,
                                                    "Error on line {line}: Formula is nested too deeply (more than {MAX_DEPTH} levels)."),

            Self::NotAnAssignment { op, line } => write!(f,
                                                         "Error on line {line}: Formula has to be in assignment form, found '{op}'."),
        }
    }
}

impl std::error::Error for ParseError {}
