use crate::domain::{DEFINITION_NOT_AVAILABLE, GlossaryEntry, definition_for};

/// Looks up every whitespace-delimited token, in input order.
///
/// Tokens are matched case-insensitively with trailing periods removed, so
/// `"bp."` finds `BP`. The original token is kept in the output.
pub fn lookup_terms(text: &str) -> Vec<GlossaryEntry> {
    text.split_whitespace()
        .map(|token| {
            let key = token.trim_end_matches('.').to_uppercase();
            GlossaryEntry {
                token: token.to_string(),
                definition: definition_for(&key).unwrap_or(DEFINITION_NOT_AVAILABLE),
            }
        })
        .collect()
}
