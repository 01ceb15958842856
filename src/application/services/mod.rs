mod extraction_service;
mod glossary;
mod keyword_retrieval;
pub mod numeric_protection;
mod qa_service;
mod safety_gate;
mod simplify_service;
mod summary;

pub use extraction_service::{ExtractionError, ExtractionService};
pub use glossary::lookup_terms;
pub use keyword_retrieval::{retrieve_top_k, score_chunk};
pub use numeric_protection::{mask_numerics, numerics_unchanged, restore_placeholders};
pub use qa_service::{DEFAULT_SNIPPET_CHARS, DEFAULT_TOP_K, QaService};
pub use safety_gate::looks_like_medical_advice;
pub use simplify_service::SimplifyService;
pub use summary::summarize;
