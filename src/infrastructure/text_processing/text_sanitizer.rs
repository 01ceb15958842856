use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static HYPHENATED_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w)-[ \t]*\r?\n[ \t]*(\w)").unwrap());

static INLINE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\S\n]+").unwrap());

static BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

const FORM_FEED: char = '\u{c}';

/// Cleans raw OCR output: NFKC-normalizes ligatures, rejoins words hyphenated
/// across line breaks, collapses runs of spaces and squeezes blank lines down to
/// a single paragraph break. Tesseract's page-separating form feeds become
/// line breaks.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let normalized: String = raw
        .nfkc()
        .map(|c| if c == FORM_FEED { '\n' } else { c })
        .collect();

    let joined = HYPHENATED_BREAK.replace_all(&normalized, "${1}${2}");

    let lines: Vec<String> = joined
        .lines()
        .map(|line| INLINE_WHITESPACE.replace_all(line.trim(), " ").into_owned())
        .collect();

    BLANK_LINES
        .replace_all(&lines.join("\n"), "\n\n")
        .trim()
        .to_string()
}
