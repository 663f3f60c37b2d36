//! String trimming, joining and lexical cleanup helpers.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// The empty string.
pub const EMPTY: &str = "";

// Printable ASCII is \x20 through \x7e; everything else goes.
static NON_ASCII: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\x20-\x7e]").expect("valid pattern"));

// Supplementary-plane characters (emoji and friends).
static ASTRAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\x{10000}-\x{10FFFF}]+").expect("valid pattern"));

/// Trims the value, passing an absent value through unchanged.
pub fn trimmed(value: Option<&str>) -> Option<&str> {
    value.map(str::trim)
}

/// Joins the parts with the separator, skipping blank entries.
pub fn join(separator: &str, parts: &[&str]) -> String {
    join_strings(separator, parts.iter().copied())
}

/// Joins the items with the separator, skipping blank entries.
pub fn join_strings<'a>(separator: &str, items: impl IntoIterator<Item = &'a str>) -> String {
    let mut joined = String::new();
    for item in items {
        if item.trim().is_empty() {
            continue;
        }
        if !joined.is_empty() {
            joined.push_str(separator);
        }
        joined.push_str(item);
    }
    joined
}

/// Returns `true` for the usual spellings of an affirmative flag:
/// `true`, `yes`, `y` or `1`, ignoring case.
pub fn truthy(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
        || value.eq_ignore_ascii_case("yes")
        || value.eq_ignore_ascii_case("y")
        || value == "1"
}

/// Removes every character outside the printable ASCII range.
pub fn strip_non_ascii(value: &str) -> String {
    NON_ASCII.replace_all(value, "").into_owned()
}

/// Removes supplementary-plane characters such as emoji.
pub fn strip_astral(value: &str) -> String {
    ASTRAL.replace_all(value, "").into_owned()
}

/// Canonical decomposition (NFD) of the value.
pub fn normalize(value: &str) -> String {
    value.nfd().collect()
}

/// Returns `true` when the value carries combining diacritical marks
/// after canonical decomposition.
pub fn has_diacritics(value: &str) -> bool {
    value.nfd().any(|c| ('\u{0300}'..='\u{036f}').contains(&c))
}
