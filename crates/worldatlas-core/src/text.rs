// crates/worldatlas-core/src/text.rs

//! # Text Utilities
//!
//! Folding for accent-insensitive matching and digit grouping for the
//! numeric display fields.

use deunicode::deunicode;

/// Folds a string for accent-insensitive, case-insensitive comparison.
///
/// `"Côte d'Ivoire"` and `"cote d'ivoire"` fold to the same key.
pub fn fold_key(s: &str) -> String {
    deunicode(s.trim()).to_ascii_lowercase()
}

/// Formats an integer with `,` between every group of three digits.
///
/// ```rust
/// use worldatlas_core::text::group_thousands;
///
/// assert_eq!(group_thousands(67_000_000), "67,000,000");
/// assert_eq!(group_thousands(-1234), "-1,234");
/// assert_eq!(group_thousands(999), "999");
/// ```
pub fn group_thousands(value: impl Into<i128>) -> String {
    group_digits(&value.into().to_string())
}

/// Groups an optionally signed run of decimal digits, e.g. the text of a
/// whole-valued `f64` too large for any integer type.
///
/// A sign in front of zero is dropped, so `"-0"` renders as `"0"`.
pub fn group_digits(text: &str) -> String {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (rest.bytes().any(|b| b != b'0'), rest),
        None => (false, text),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
