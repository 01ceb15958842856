use std::sync::LazyLock;

use regex::Regex;

use crate::application::ports::TextSplitter;
use crate::domain::Chunk;

pub const DEFAULT_MAX_CHUNK_CHARS: usize = 800;

static SENTENCE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.?!]\s+").unwrap());

/// Splits after `.`, `?` or `!` followed by whitespace. Sentences are trimmed
/// and empty ones dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // The punctuation is a single ASCII byte and stays with its sentence.
        sentences.push(&text[start..boundary.start() + 1]);
        start = boundary.end();
    }
    sentences.push(&text[start..]);

    sentences
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Greedily packs sentences into chunks of at most `max_chars` characters.
///
/// A sentence longer than the budget becomes a chunk of its own.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0;

    for sentence in split_sentences(text) {
        let sentence_chars = sentence.chars().count();

        if current_chars + sentence_chars + 1 <= max_chars {
            if !current.is_empty() {
                current.push(' ');
                current_chars += 1;
            }
            current.push_str(sentence);
            current_chars += sentence_chars;
        } else {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
            current.push_str(sentence);
            current_chars = sentence_chars;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

pub struct SentencePackingSplitter {
    max_chars: usize,
}

impl SentencePackingSplitter {
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }
}

impl Default for SentencePackingSplitter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CHUNK_CHARS)
    }
}

impl TextSplitter for SentencePackingSplitter {
    fn split(&self, text: &str) -> Vec<Chunk> {
        chunk_text(text, self.max_chars)
            .into_iter()
            .enumerate()
            .map(|(index, text)| Chunk::new(index, text))
            .collect()
    }
}
