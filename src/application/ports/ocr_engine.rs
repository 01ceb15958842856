use async_trait::async_trait;

#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Recognizes text in a PNG-encoded image.
    async fn recognize(&self, image_png: &[u8]) -> Result<String, OcrError>;
}

#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("ocr engine unavailable: {0}")]
    EngineUnavailable(String),
    #[error("recognition failed: {0}")]
    RecognitionFailed(String),
}
