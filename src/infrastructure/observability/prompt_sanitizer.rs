use std::sync::LazyLock;

use regex::Regex;

use crate::application::services::mask_numerics;

const MAX_VISIBLE_CHARS: usize = 100;

static CREDENTIAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(bearer\s+|api_key=|password=|secret=|token=)[^\s&"']+"#).unwrap()
});

/// Makes user-supplied text safe to log.
///
/// Credentials are redacted and numeric values (doses, lab results, dates) are
/// replaced by placeholders before the text is truncated.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let redacted = CREDENTIAL.replace_all(trimmed, "${1}[REDACTED]");
    let masked = mask_numerics(&redacted).masked;

    let total_chars = masked.chars().count();
    if total_chars > MAX_VISIBLE_CHARS {
        let visible: String = masked.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{visible}... ({total_chars} chars total)")
    } else {
        masked
    }
}
