/// A contiguous run of sentences from a document.
///
/// `index` is the chunk's position in the split sequence and is the only
/// provenance a source reference carries back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub index: usize,
    pub text: String,
}

impl Chunk {
    pub fn new(index: usize, text: String) -> Self {
        Self { index, text }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredChunk {
    pub chunk: Chunk,
    pub score: usize,
}

impl ScoredChunk {
    pub fn new(chunk: Chunk, score: usize) -> Self {
        Self { chunk, score }
    }
}
