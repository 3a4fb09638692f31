/// The lexer module tokenizes formulas.
///
/// The lexer reads the raw formula text and produces a stream of tokens:
/// names with optional types, numbers, quoted strings, operators and
/// parentheses. Malformed input is reported and skipped, never fatal.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line numbers.
/// - Disambiguates two-character operators from their prefixes.
/// - Recovers from illegal characters and oversized numbers.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser consumes the token stream produced by the lexer and constructs
/// exactly one top-level statement per call. Each call is independent; no
/// state is kept between calls.
///
/// # Responsibilities
/// - Enforces the `NAME <op> <expression>` statement shape.
/// - Applies operator precedence and associativity, unary minus and
///   parentheses.
/// - Reports syntax errors with line information.
pub mod parser;
/// The simplify module folds constant subexpressions.
///
/// Folding rebuilds the tree bottom-up, replacing all-numeric subtrees with
/// their value. Inputs are never mutated.
pub mod simplify;
/// The symbols module extracts the symbols an expression references.
pub mod symbols;
