//! Numeric helpers.

use once_cell::sync::Lazy;
use regex::Regex;

static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+(\.\d+)?$").expect("valid pattern"));

/// Rounds half-up to the requested number of decimal places.
///
/// ```
/// use commons_util_rs::number::round_decimal;
///
/// assert_eq!(round_decimal(10.123456789, 2), 10.12);
/// assert_eq!(round_decimal(10.123456789, 4), 10.1235);
/// assert_eq!(round_decimal(10.576, 2), 10.58);
/// ```
pub fn round_decimal(number: f64, decimal_places: u32) -> f64 {
    let factor = 10f64.powi(decimal_places as i32);
    (number * factor).round() / factor
}

/// Returns `true` when the text is a plain decimal number: an optional
/// leading minus, digits, and an optional fractional part.
pub fn is_number(text: &str) -> bool {
    NUMBER.is_match(text)
}
