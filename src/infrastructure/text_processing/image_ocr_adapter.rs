use std::io::Cursor;
use std::sync::Arc;

use async_trait::async_trait;
use image::ImageFormat;

use crate::application::ports::{FileLoader, FileLoaderError, OcrEngine};
use crate::domain::{Document, ExtractedText, ExtractionEngine};

use super::text_sanitizer::sanitize_extracted_text;

/// OCR for raster images in any format the `image` crate decodes.
pub struct ImageOcrAdapter {
    ocr_engine: Arc<dyn OcrEngine>,
}

impl ImageOcrAdapter {
    pub fn new(ocr_engine: Arc<dyn OcrEngine>) -> Self {
        Self { ocr_engine }
    }

    fn normalize_to_png(data: &[u8]) -> Result<Vec<u8>, FileLoaderError> {
        let image = image::load_from_memory(data).map_err(|e| {
            FileLoaderError::UnsupportedContentType(format!("not a decodable image: {e}"))
        })?;

        let mut png_bytes: Vec<u8> = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("PNG encode failed: {e}")))?;

        Ok(png_bytes)
    }
}

#[async_trait]
impl FileLoader for ImageOcrAdapter {
    #[tracing::instrument(skip_all, fields(filename = %document.filename))]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<ExtractedText, FileLoaderError> {
        let bytes = data.to_vec();
        let png = tokio::task::spawn_blocking(move || Self::normalize_to_png(&bytes))
            .await
            .map_err(|e| FileLoaderError::Internal(format!("task join error: {e}")))??;

        let raw = self
            .ocr_engine
            .recognize(&png)
            .await
            .map_err(|e| FileLoaderError::ExtractionFailed(e.to_string()))?;

        Ok(ExtractedText::new(
            sanitize_extracted_text(&raw),
            ExtractionEngine::TesseractImage,
        ))
    }
}
