use std::sync::Arc;

use crate::application::ports::{FileLoader, LlmClient};
use crate::application::services::{ExtractionService, QaService, SimplifyService};

pub struct AppState<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    pub extraction_service: Arc<ExtractionService<F>>,
    pub qa_service: Arc<QaService<L>>,
    pub simplify_service: Arc<SimplifyService>,
    pub max_upload_bytes: usize,
}

impl<F, L> Clone for AppState<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            extraction_service: Arc::clone(&self.extraction_service),
            qa_service: Arc::clone(&self.qa_service),
            simplify_service: Arc::clone(&self.simplify_service),
            max_upload_bytes: self.max_upload_bytes,
        }
    }
}
