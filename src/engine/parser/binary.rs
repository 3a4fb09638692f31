use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    engine::{
        lexer::Token,
        parser::{
            core::{ParseResult, Parsed, check_depth},
            unary::parse_unary,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// - `depth`: Number of parentheses and unary minuses already entered.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression, and its
/// height. Every operator in the chain adds one level, so long chains are
/// bounded like nesting is.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (mut left, mut height) = parse_multiplicative(tokens, depth)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let line = *line;
            tokens.next();
            let (right, right_height) = parse_multiplicative(tokens, depth)?;
            height = check_depth(height.max(right_height) + 1, line)?;
            left = Expr::binary(left, op, right, line);
            continue;
        }
        break;
    }
    Ok((left, height))
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// - `depth`: Number of parentheses and unary minuses already entered.
///
/// # Returns
/// A binary expression tree combining unary-level nodes, and its height.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (mut left, mut height) = parse_unary(tokens, depth)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let line = *line;
            tokens.next();
            let (right, right_height) = parse_unary(tokens, depth)?;
            height = check_depth(height.max(right_height) + 1, line)?;
            left = Expr::binary(left, op, right, line);
            continue;
        }
        break;
    }
    Ok((left, height))
}

/// Maps a token to its corresponding expression operator.
///
/// Only `+`, `-`, `*` and `/` may appear inside an expression; every other
/// token yields `None`.
///
/// # Example
/// ```
/// use formula::{
///     ast::BinaryOperator,
///     engine::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}

/// Maps a token to the statement operator it spells, if any.
///
/// # Example
/// ```
/// use formula::{
///     ast::BinaryOperator,
///     engine::{lexer::Token, parser::binary::token_to_statement_operator},
/// };
///
/// assert_eq!(token_to_statement_operator(&Token::ColonEquals),
///            Some(BinaryOperator::Connect));
/// assert_eq!(token_to_statement_operator(&Token::Plus), None);
/// ```
#[must_use]
pub const fn token_to_statement_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Equals => Some(BinaryOperator::Assign),
        Token::ColonEquals => Some(BinaryOperator::Connect),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::Less => Some(BinaryOperator::Less),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        _ => None,
    }
}
