//! # formula
//!
//! formula parses one-line typed-symbol formulas such as
//! `out:RTC.TimedLong = in1:RTC.TimedLong + in2:RTC.TimedLong` into an
//! abstract syntax tree, folds constant subexpressions, and extracts the
//! symbols referenced on each side of the statement. Code generators consume
//! the resulting tree.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Formula,
    engine::{lexer::tokenize, parser::statement::parse_tokens},
    error::{LexDiagnostic, ParseError},
};

/// Defines the structure of parsed formulas.
///
/// This module declares the `Symbol`, `Expr` and `Formula` types that
/// represent a formula as a tree. The tree is built by the parser, rebuilt by
/// the simplifier and walked by code generators.
///
/// # Responsibilities
/// - Defines symbols with optional types.
/// - Defines the closed set of expression nodes and operators.
/// - Defines the top-level statement and its output/input views.
pub mod ast;
/// Lexing, parsing, folding and symbol extraction.
///
/// This module ties together the phases that turn a formula string into a
/// tree and analyse it.
///
/// # Responsibilities
/// - Tokenizes formulas with non-fatal recovery.
/// - Parses one statement under the operator-precedence grammar.
/// - Folds constants and collects symbols.
pub mod engine;
/// Provides the error types for lexing, parsing and folding.
///
/// Lexical problems are diagnostics that never stop a parse. Syntax errors
/// and fold errors are returned as `Err` values with source line numbers.
pub mod error;
/// General numeric helpers.
pub mod util;

/// Parses a formula into its top-level statement.
///
/// Every call is independent: a failed parse returns an error and never a
/// result left over from an earlier call. Lexical problems are logged and
/// skipped; use [`parse_with_diagnostics`] to inspect them.
///
/// # Errors
/// Returns a [`ParseError`] if the input is not exactly one statement.
///
/// # Examples
/// ```
/// use formula::{ast::BinaryOperator, parse};
///
/// let formula = parse("out:Type = in1:Type + in2:Type").unwrap();
/// assert_eq!(formula.op, BinaryOperator::Assign);
/// assert_eq!(formula.target.name(), "out");
/// assert_eq!(formula.target.type_name(), Some("Type"));
///
/// // Syntax errors are reported, not hidden.
/// assert!(parse("x = 1 +").is_err());
/// ```
pub fn parse(source: &str) -> Result<Formula, ParseError> {
    parse_with_diagnostics(source).0
}

/// Parses a formula and also returns the lexical problems recovered from.
///
/// # Examples
/// ```
/// use formula::{error::LexDiagnostic, parse_with_diagnostics};
///
/// let (result, diagnostics) = parse_with_diagnostics("x = 1 $ 2");
///
/// assert!(result.is_err());
/// assert_eq!(diagnostics,
///            vec![LexDiagnostic::IllegalCharacter { character: '$',
///                                                   line:      1, }]);
/// ```
#[must_use]
pub fn parse_with_diagnostics(source: &str)
                              -> (Result<Formula, ParseError>, Vec<LexDiagnostic>) {
    let tokenized = tokenize(source);
    let result = parse_tokens(&tokenized.tokens);

    match &result {
        Ok(formula) => log::trace!("parsed {formula}"),
        Err(e) => log::debug!("{e}"),
    }

    (result, tokenized.diagnostics)
}
