use std::io::Cursor;
use std::sync::Arc;

use image::{ImageFormat, RgbImage};

use medease::application::ports::{FileLoader, FileLoaderError, OcrEngine, OcrError};
use medease::domain::{Document, ExtractionEngine};
use medease::infrastructure::text_processing::ImageOcrAdapter;

struct CannedOcrEngine(&'static str);

#[async_trait::async_trait]
impl OcrEngine for CannedOcrEngine {
    async fn recognize(&self, image_png: &[u8]) -> Result<String, OcrError> {
        assert!(image::load_from_memory(image_png).is_ok());
        Ok(self.0.to_string())
    }
}

fn encode(format: ImageFormat) -> Vec<u8> {
    let mut bytes = Vec::new();
    RgbImage::new(4, 4)
        .write_to(&mut Cursor::new(&mut bytes), format)
        .unwrap();
    bytes
}

fn document() -> Document {
    Document::new("scan.png".to_string(), Some("image/png".to_string()), 0)
}

#[tokio::test]
async fn given_decodable_image_when_extracting_then_returns_sanitized_ocr_text() {
    let adapter = ImageOcrAdapter::new(Arc::new(CannedOcrEngine("ﬁrst   line\n\n\n\nsecond")));

    let extracted = adapter
        .extract_text(&encode(ImageFormat::Png), &document())
        .await
        .unwrap();

    assert_eq!(extracted.text, "first line\n\nsecond");
    assert_eq!(extracted.engine, ExtractionEngine::TesseractImage);
}

#[tokio::test]
async fn given_non_png_image_when_extracting_then_still_recognizes_it() {
    let adapter = ImageOcrAdapter::new(Arc::new(CannedOcrEngine("text")));

    let extracted = adapter
        .extract_text(&encode(ImageFormat::Bmp), &document())
        .await
        .unwrap();

    assert_eq!(extracted.text, "text");
}

#[tokio::test]
async fn given_undecodable_bytes_when_extracting_then_reports_unsupported_content() {
    let adapter = ImageOcrAdapter::new(Arc::new(CannedOcrEngine("unused")));

    let err = adapter
        .extract_text(b"%PDF-1.4 not an image", &document())
        .await
        .unwrap_err();

    assert!(matches!(err, FileLoaderError::UnsupportedContentType(_)));
    assert!(err.is_recoverable());
}
