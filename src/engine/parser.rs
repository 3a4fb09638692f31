/// Core parsing entry points.
///
/// Holds the result alias shared by all parsing functions and the expression
/// entry point that starts at the lowest precedence level.
pub mod core;

/// Binary operator parsing.
///
/// Implements the left-associative additive and multiplicative levels and
/// maps tokens to binary and statement operators.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles unary minus, literals, names, strings and parenthesized groups.
pub mod unary;

/// Statement parsing.
///
/// Parses the single top-level `NAME <op> <expression>` construct and
/// rejects trailing input.
pub mod statement;
