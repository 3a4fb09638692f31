use logos::Logos;

use crate::{error::LexDiagnostic, util::num::decimal_to_f64_checked};

/// Represents a lexical token in a formula.
///
/// The token table is generated at compile time by `logos`, so it is built
/// once and shared by every caller. Two-character operators win over their
/// one-character prefixes by longest match (`:=` over `=`, `>=` over `>`,
/// `==` over `=`). There is no single `!` token; a lone `!` is illegal.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `42`. Always read as `f64`.
    #[regex(r"[0-9]+", parse_number)]
    Number(f64),
    /// Identifier tokens with an optional type, such as `in1` or
    /// `in1:RTC.TimedLong`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_.:]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Quoted string literal tokens. The quotes are stripped.
    #[regex(r#""[^"\n]*""#, parse_string)]
    Str(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `=`
    #[token("=")]
    Equals,
    /// `:=`
    #[token(":=")]
    ColonEquals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,

    /// Newlines only advance the line counter.
    #[regex(r"\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces and tabs.
    #[regex(r"[ \t]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and collects the diagnostics raised by
/// token callbacks.
#[derive(Debug, Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:        usize,
    /// Problems recovered from so far.
    pub diagnostics: Vec<LexDiagnostic>,
}

/// The output of [`tokenize`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tokenized {
    /// `(token, line)` pairs in source order.
    pub tokens:      Vec<(Token, usize)>,
    /// Recovered problems, in source order.
    pub diagnostics: Vec<LexDiagnostic>,
}

/// Converts a formula into tokens.
///
/// Tokenization never fails. Characters that start no token are reported
/// as [`LexDiagnostic::IllegalCharacter`] and skipped; numeric literals too
/// large for a finite `f64` are reported as
/// [`LexDiagnostic::NumberTooLarge`] and read as `0.0`. Every diagnostic is
/// also logged at `warn` level.
///
/// # Example
/// ```
/// use formula::engine::lexer::{Token, tokenize};
///
/// let out = tokenize("x = 1 $ 2");
///
/// assert_eq!(out.diagnostics.len(), 1);
/// assert_eq!(out.tokens.iter().map(|(t, _)| t.clone()).collect::<Vec<_>>(),
///            vec![Token::Identifier("x".to_string()),
///                 Token::Equals,
///                 Token::Number(1.0),
///                 Token::Number(2.0)]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Tokenized {
    let mut tokens = Vec::new();
    let mut extras = LexerExtras { line:        1,
                                   diagnostics: Vec::new(), };
    let mut offset = 0;

    // A failed match may swallow more than the offending character (e.g. an
    // unterminated string), so lexing restarts right after that character.
    'restart: loop {
        let mut lexer = Token::lexer_with_extras(&source[offset..], extras);

        while let Some(token) = lexer.next() {
            let line = lexer.extras.line;
            if let Ok(tok) = token {
                tokens.push((tok, line));
                continue;
            }

            let start = offset + lexer.span().start;
            let Some(character) = source[start..].chars().next() else {
                break;
            };
            lexer.extras
                 .diagnostics
                 .push(LexDiagnostic::IllegalCharacter { character, line });
            extras = std::mem::take(&mut lexer.extras);
            offset = start + character.len_utf8();
            continue 'restart;
        }

        extras = std::mem::take(&mut lexer.extras);
        break;
    }

    for diagnostic in &extras.diagnostics {
        log::warn!("{diagnostic}");
    }

    Tokenized { tokens,
                diagnostics: extras.diagnostics }
}

/// Parses a numeric literal from the current token slice.
///
/// Literals that do not fit a finite `f64` are recorded in the lexer extras
/// and replaced by `0.0`, so the token is still produced.
fn parse_number(lex: &mut logos::Lexer<Token>) -> f64 {
    let lexeme = lex.slice();
    decimal_to_f64_checked(lexeme).unwrap_or_else(|| {
                                       let line = lex.extras.line;
                                       lex.extras
                                          .diagnostics
                                          .push(LexDiagnostic::NumberTooLarge { lexeme: lexeme.to_string(),
                                                                                line });
                                       0.0
                                   })
}

/// Strips the surrounding quotes from a string literal.
fn parse_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}
