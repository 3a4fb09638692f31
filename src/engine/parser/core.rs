use std::iter::Peekable;

use crate::{
    ast::Expr,
    engine::{lexer::Token, parser::binary::parse_additive},
    error::ParseError,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// An expression together with the height of its tree (a leaf has height 1).
pub type Parsed = (Expr, usize);

/// Largest nesting the parser accepts.
///
/// Bounds both the parser's own recursion (parentheses and unary minus) and
/// the height of every tree it returns, so folding, symbol collection,
/// display and drop of a parsed formula stay within the stack.
pub const MAX_DEPTH: usize = 256;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `depth`: Number of parentheses and unary minuses already entered.
///
/// # Returns
/// The parsed expression node and its height.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_additive(tokens, depth)
}

/// Returns `depth` unchanged if it is within [`MAX_DEPTH`].
///
/// # Errors
/// Returns `NestingTooDeep` otherwise.
pub(in crate::engine::parser) const fn check_depth(depth: usize,
                                                   line: usize)
                                                   -> ParseResult<usize> {
    if depth > MAX_DEPTH {
        return Err(ParseError::NestingTooDeep { line });
    }
    Ok(depth)
}
