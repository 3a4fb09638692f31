/// Converts a run of decimal digits to an `f64` if the result is finite.
///
/// Rust's float parser never fails on a digit run; it rounds very long
/// literals to infinity instead. Such literals are treated as too large.
///
/// ## Parameters
/// - `lexeme`: The digits as written in source.
///
/// ## Returns
/// - `Some(f64)`: The parsed value if it is finite.
/// - `None`: If the text is not a number or does not fit a finite `f64`.
///
/// ## Example
/// ```
/// use formula::util::num::decimal_to_f64_checked;
///
/// assert_eq!(decimal_to_f64_checked("42"), Some(42.0));
/// assert_eq!(decimal_to_f64_checked(&"9".repeat(400)), None);
/// assert_eq!(decimal_to_f64_checked("4x"), None);
/// ```
#[must_use]
pub fn decimal_to_f64_checked(lexeme: &str) -> Option<f64> {
    lexeme.parse::<f64>().ok().filter(|value| value.is_finite())
}
