use std::iter::Peekable;

use crate::{
    ast::{Formula, Symbol},
    engine::{
        lexer::Token,
        parser::{
            binary::token_to_statement_operator,
            core::{ParseResult, parse_expression},
        },
    },
    error::ParseError,
};

/// Parses the token stream of a whole formula.
///
/// This wraps [`parse_statement`], requires that every token is consumed,
/// and points end-of-input errors at the last line of the input.
///
/// # Errors
/// Returns a `ParseError` if the tokens do not form exactly one statement.
///
/// # Example
/// ```
/// use formula::{
///     ast::BinaryOperator,
///     engine::{lexer::tokenize, parser::statement::parse_tokens},
/// };
///
/// let tokens = tokenize("out:Long := in:Long").tokens;
/// let formula = parse_tokens(&tokens).unwrap();
///
/// assert_eq!(formula.op, BinaryOperator::Connect);
/// assert_eq!(formula.target.name(), "out");
/// ```
pub fn parse_tokens(tokens: &[(Token, usize)]) -> ParseResult<Formula> {
    let last_line = tokens.last().map_or(1, |(_, line)| *line);
    let mut iter = tokens.iter().peekable();

    let formula = parse_statement(&mut iter).map_err(|e| match e {
                                                 ParseError::UnexpectedEndOfInput { .. } => {
                                                     ParseError::UnexpectedEndOfInput { line: last_line }
                                                 },
                                                 other => other,
                                             })?;

    if let Some((tok, line)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token: format!("{tok:?}"),
                                                          line:  *line, });
    }

    Ok(formula)
}

/// Parses a single statement.
///
/// A statement is a bare name, one statement operator, and an expression:
///
/// ```text
///     statement := NAME (":=" | "=" | ">" | ">=" | "<" | "<=" | "==" | "!=") expression
/// ```
///
/// The statement operator has no precedence relation with the expression
/// operators; it appears once, between the target and the whole expression.
/// Tokens after the expression are left in the iterator.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Formula`].
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Formula>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let target = match tokens.next() {
        Some((Token::Identifier(id), _)) => Symbol::new(id),
        Some((tok, line)) => {
            return Err(ParseError::ExpectedTarget { token: format!("{tok:?}"),
                                                    line:  *line, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };

    let (op, line) = match tokens.next() {
        Some((tok, line)) => match token_to_statement_operator(tok) {
            Some(op) => (op, *line),
            None => {
                return Err(ParseError::ExpectedStatementOperator { token: format!("{tok:?}"),
                                                                   line:  *line, });
            },
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };

    let (value, _) = parse_expression(tokens, 0)?;

    Ok(Formula { op,
                 target,
                 value,
                 line })
}
