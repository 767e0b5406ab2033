// crates/aqdash-core/src/text.rs

//! Text normalization used for name matching.

use deunicode::deunicode;

/// Fold a string into a comparison key: transliterated to ASCII,
/// lowercased, surrounding whitespace removed.
///
/// ```rust
/// use aqdash_core::text::fold_key;
///
/// assert_eq!(fold_key("  São Paulo "), "sao paulo");
/// assert_eq!(fold_key("Zürich"), "zurich");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode(s.trim()).to_ascii_lowercase()
}

/// Equality on folded keys.
#[inline]
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}
