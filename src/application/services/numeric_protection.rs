//! Reversible masking of numeric values.
//!
//! Doses, lab values, dates and times are swapped for positional placeholders
//! before any text transformation and restored afterwards. A transformation
//! whose output no longer carries the same ordered numerics is rejected.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::domain::{MaskedText, PlaceholderMap};

static NUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d[\d.,:/-]*").unwrap());

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[NUM_\d+\]").unwrap());

/// Replaces every numeric substring, in order of appearance, with `[NUM_i]`.
pub fn mask_numerics(text: &str) -> MaskedText {
    let mut placeholders = PlaceholderMap::new();
    let masked = NUMERIC
        .replace_all(text, |caps: &Captures| placeholders.push(caps[0].to_string()))
        .into_owned();

    MaskedText {
        masked,
        placeholders,
    }
}

/// Substitutes each known placeholder with its original value. Placeholders not
/// present in `placeholders` are left as they are.
pub fn restore_placeholders(text: &str, placeholders: &PlaceholderMap) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &Captures| {
            placeholders
                .resolve(&caps[0])
                .unwrap_or(&caps[0])
                .to_string()
        })
        .into_owned()
}

pub fn extract_numerics(text: &str) -> Vec<&str> {
    NUMERIC.find_iter(text).map(|m| m.as_str()).collect()
}

/// True when both texts carry the same numeric substrings in the same order.
pub fn numerics_unchanged(original: &str, new: &str) -> bool {
    extract_numerics(original) == extract_numerics(new)
}
