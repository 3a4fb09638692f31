use std::iter::Peekable;

use crate::{
    ast::{Expr, Symbol, UnaryOperator},
    engine::{
        lexer::Token,
        parser::core::{ParseResult, Parsed, check_depth, parse_expression},
    },
    error::ParseError,
};

/// Parses a unary expression.
///
/// Supports the prefix operator `-` (numeric negation). Negation is
/// right-associative and binds tighter than every binary operator, so
/// `--x * y` is parsed as `(-(-x)) * y`.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Number of parentheses and unary minuses already entered.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression, and its height.
///
/// # Errors
/// Returns `NestingTooDeep` once `depth` passes
/// [`MAX_DEPTH`](crate::engine::parser::core::MAX_DEPTH).
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some((Token::Minus, line)) = tokens.peek() {
        let line = *line;
        let depth = check_depth(depth + 1, line)?;
        tokens.next();
        let (expr, height) = parse_unary(tokens, depth)?;
        let height = check_depth(height + 1, line)?;
        Ok((Expr::UnaryOp { op: UnaryOperator::Negate,
                            expr: Box::new(expr),
                            line },
            height))
    } else {
        parse_primary(tokens, depth)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions are numbers, names, quoted strings and parenthesized
/// expressions.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | NAME
///              | STRING
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `depth`: Number of parentheses and unary minuses already entered.
///
/// # Returns
/// The parsed primary [`Expr`] and its height, or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Number(value), _)) => Ok((Expr::Number(*value), 1)),
        Some((Token::Identifier(id), _)) => Ok((Expr::Symbol(Symbol::new(id)), 1)),
        Some((Token::Str(text), _)) => Ok((Expr::Str(text.clone()), 1)),
        Some((Token::LParen, line)) => parse_grouping(tokens, depth, *line),
        Some((tok, line)) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                               line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses the rest of a parenthesized expression after its `(`.
///
/// The grouping produces no node of its own; it only overrides precedence.
///
/// # Errors
/// Returns `ExpectedClosingParen` if the matching `)` is missing, and
/// `NestingTooDeep` if the group is nested too deeply.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize, line: usize) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let depth = check_depth(depth + 1, line)?;
    let parsed = parse_expression(tokens, depth)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(parsed),
        _ => Err(ParseError::ExpectedClosingParen { line }),
    }
}
