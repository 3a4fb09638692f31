/// Numeric conversion helpers.
///
/// This module provides the conversion used by the lexer to turn decimal
/// digit runs into `f64` values, refusing literals that would overflow to
/// infinity instead of silently accepting them.
pub mod num;
