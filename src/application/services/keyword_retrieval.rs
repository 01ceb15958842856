use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{Chunk, ScoredChunk};

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

fn word_set(text: &str) -> HashSet<String> {
    WORD.find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Number of distinct lowercase words shared by `query` and `chunk`.
pub fn score_chunk(query: &str, chunk: &str) -> usize {
    word_set(query).intersection(&word_set(chunk)).count()
}

/// Ranks chunks by word overlap with `query`, highest first.
///
/// When any chunk overlaps at all, only overlapping chunks are returned.
/// Otherwise the first `k` chunks come back in document order with a zero score.
/// Ties keep document order.
pub fn retrieve_top_k(query: &str, chunks: &[Chunk], k: usize) -> Vec<ScoredChunk> {
    let query_words = word_set(query);

    let mut scored: Vec<ScoredChunk> = chunks
        .iter()
        .map(|chunk| {
            let score = query_words.intersection(&word_set(&chunk.text)).count();
            ScoredChunk::new(chunk.clone(), score)
        })
        .collect();
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    if scored.iter().any(|s| s.score > 0) {
        scored.into_iter().filter(|s| s.score > 0).take(k).collect()
    } else {
        scored.into_iter().take(k).collect()
    }
}
