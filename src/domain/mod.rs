mod chunk;
mod document;
mod glossary;
mod masked_text;
mod qa_answer;
mod qa_mode;
mod simplification;
mod summary;

pub use chunk::{Chunk, ScoredChunk};
pub use document::{Document, ExtractedText, ExtractionEngine};
pub use glossary::{DEFINITION_NOT_AVAILABLE, GlossaryEntry, definition_for};
pub use masked_text::{MaskedText, PlaceholderMap};
pub use qa_answer::{AnswerMethod, QaAnswer, QaAudit, SourceRef};
pub use qa_mode::QaMode;
pub use simplification::{SimplifyAuditEntry, SimplifyOutcome, SimplifyStatus};
pub use summary::{Summary, SummaryAudit, SummaryLevel};
