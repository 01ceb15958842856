use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, ExtractedText};

/// Tries each loader in order and returns the first successful extraction.
///
/// A loader that cannot read the bytes hands over to the next one. If none can,
/// the combined reasons are reported as [`FileLoaderError::Unreadable`].
/// Internal errors stop the chain immediately.
pub struct FallbackFileLoader {
    loaders: Vec<Arc<dyn FileLoader>>,
}

impl FallbackFileLoader {
    pub fn new(loaders: Vec<Arc<dyn FileLoader>>) -> Self {
        Self { loaders }
    }
}

#[async_trait]
impl FileLoader for FallbackFileLoader {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<ExtractedText, FileLoaderError> {
        let mut failures = Vec::with_capacity(self.loaders.len());

        for loader in &self.loaders {
            match loader.extract_text(data, document).await {
                Ok(extracted) => return Ok(extracted),
                Err(e) if e.is_recoverable() => {
                    tracing::debug!(error = %e, "Loader could not read document, trying next");
                    failures.push(e.to_string());
                }
                Err(e) => return Err(e),
            }
        }

        let reason = if failures.is_empty() {
            "no loaders configured".to_string()
        } else {
            failures.join("; ")
        };

        Err(FileLoaderError::Unreadable {
            filename: document.filename.clone(),
            reason,
        })
    }
}
