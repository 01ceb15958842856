use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, ExtractedText};

pub struct ExtractionService<F>
where
    F: FileLoader,
{
    file_loader: Arc<F>,
}

impl<F> ExtractionService<F>
where
    F: FileLoader,
{
    pub fn new(file_loader: Arc<F>) -> Self {
        Self { file_loader }
    }

    #[tracing::instrument(
        skip_all,
        fields(filename = %document.filename, size_bytes = document.size_bytes)
    )]
    pub async fn extract(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<ExtractedText, ExtractionError> {
        if data.is_empty() {
            return Err(ExtractionError::EmptyUpload);
        }

        let extracted = self.file_loader.extract_text(data, document).await?;

        tracing::info!(
            engine = %extracted.engine,
            text_chars = extracted.text.chars().count(),
            "Text extraction complete"
        );

        Ok(extracted)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("uploaded file is empty")]
    EmptyUpload,
    #[error(transparent)]
    Loader(#[from] FileLoaderError),
}

impl ExtractionError {
    /// Whether the failure is caused by the uploaded bytes rather than the server.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Loader(FileLoaderError::Internal(_)))
    }
}
