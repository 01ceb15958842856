use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError, OcrEngine};
use crate::domain::{Document, ExtractedText, ExtractionEngine};
use crate::presentation::config::OcrSettings;

use super::pdf_rasterizer::rasterize_pages;
use super::text_sanitizer::sanitize_extracted_text;

#[derive(Debug, Clone)]
pub struct PdfRenderOptions {
    pub dpi: f32,
    pub max_pages: usize,
    /// Directory holding the PDFium shared library; the system library is used when unset.
    pub library_dir: Option<PathBuf>,
}

impl Default for PdfRenderOptions {
    fn default() -> Self {
        Self {
            dpi: 200.0,
            max_pages: 50,
            library_dir: None,
        }
    }
}

impl From<&OcrSettings> for PdfRenderOptions {
    fn from(settings: &OcrSettings) -> Self {
        Self {
            dpi: settings.pdf_render_dpi,
            max_pages: settings.pdf_max_pages,
            library_dir: settings.pdfium_library_dir.as_ref().map(PathBuf::from),
        }
    }
}

/// OCR for scanned PDFs: every page is rasterized and recognized in turn.
pub struct PdfOcrAdapter {
    ocr_engine: Arc<dyn OcrEngine>,
    options: PdfRenderOptions,
}

impl PdfOcrAdapter {
    pub fn new(ocr_engine: Arc<dyn OcrEngine>, options: PdfRenderOptions) -> Self {
        Self {
            ocr_engine,
            options,
        }
    }
}

#[async_trait]
impl FileLoader for PdfOcrAdapter {
    #[tracing::instrument(skip_all, fields(filename = %document.filename))]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<ExtractedText, FileLoaderError> {
        let bytes = data.to_vec();
        let options = self.options.clone();

        let pages = tokio::task::spawn_blocking(move || rasterize_pages(&bytes, &options))
            .await
            .map_err(|e| FileLoaderError::Internal(format!("task join error: {e}")))??;

        if pages.is_empty() {
            return Err(FileLoaderError::ExtractionFailed(
                "PDF contains no pages".to_string(),
            ));
        }

        let mut page_texts = Vec::with_capacity(pages.len());
        for (index, page) in pages.iter().enumerate() {
            let raw = self.ocr_engine.recognize(page).await.map_err(|e| {
                FileLoaderError::ExtractionFailed(format!("page {}: {e}", index + 1))
            })?;
            page_texts.push(sanitize_extracted_text(&raw));
        }

        tracing::info!(page_count = page_texts.len(), "PDF OCR complete");

        Ok(ExtractedText::new(
            page_texts.join("\n"),
            ExtractionEngine::TesseractPdf,
        ))
    }
}
