mod file_loader;
mod llm_client;
mod ocr_engine;
mod text_simplifier;
mod text_splitter;

pub use file_loader::{FileLoader, FileLoaderError};
pub use llm_client::{LlmClient, LlmClientError};
pub use ocr_engine::{OcrEngine, OcrError};
pub use text_simplifier::{SimplifierError, TextSimplifier};
pub use text_splitter::TextSplitter;
