use async_trait::async_trait;

use crate::domain::{Document, ExtractedText};

#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<ExtractedText, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("unsupported content: {0}")]
    UnsupportedContentType(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("unreadable file {filename}: {reason}")]
    Unreadable { filename: String, reason: String },
    #[error("internal error: {0}")]
    Internal(String),
}

impl FileLoaderError {
    /// Whether another loader may still succeed on the same bytes.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Internal(_))
    }
}
