#[derive(Debug, Clone, PartialEq, Eq)]
/// A problem found and recovered from during tokenization.
pub enum LexDiagnostic {
    /// A character that starts no token. It is skipped.
    IllegalCharacter {
        /// The skipped character.
        character: char,
        /// The source line where it was found.
        line:      usize,
    },
    /// A numeric literal that does not fit a finite `f64`. It is read as `0.0`.
    NumberTooLarge {
        /// The literal as written.
        lexeme: String,
        /// The source line where it was found.
        line:   usize,
    },
}

impl std::fmt::Display for LexDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalCharacter { character, line } => {
                write!(f, "Line {line}: Illegal character '{character}'.")
            },
            Self::NumberTooLarge { lexeme, line } => {
                write!(f, "Line {line}: Number too large: {lexeme}.")
            },
        }
    }
}
