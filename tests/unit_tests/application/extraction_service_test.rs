use std::sync::Arc;

use medease::application::ports::{FileLoader, FileLoaderError};
use medease::application::services::{ExtractionError, ExtractionService};
use medease::domain::{Document, ExtractedText, ExtractionEngine};

struct EchoLoader;

#[async_trait::async_trait]
impl FileLoader for EchoLoader {
    async fn extract_text(
        &self,
        data: &[u8],
        _document: &Document,
    ) -> Result<ExtractedText, FileLoaderError> {
        Ok(ExtractedText::new(
            String::from_utf8_lossy(data).into_owned(),
            ExtractionEngine::TesseractImage,
        ))
    }
}

struct BrokenLoader;

#[async_trait::async_trait]
impl FileLoader for BrokenLoader {
    async fn extract_text(
        &self,
        _data: &[u8],
        _document: &Document,
    ) -> Result<ExtractedText, FileLoaderError> {
        Err(FileLoaderError::Internal("disk gone".to_string()))
    }
}

fn document(size: u64) -> Document {
    Document::new("scan.png".to_string(), Some("image/png".to_string()), size)
}

#[tokio::test]
async fn given_readable_bytes_when_extracting_then_returns_loader_output() {
    let service = ExtractionService::new(Arc::new(EchoLoader));

    let extracted = service.extract(b"hello", &document(5)).await.unwrap();

    assert_eq!(extracted.text, "hello");
    assert_eq!(extracted.engine, ExtractionEngine::TesseractImage);
}

#[tokio::test]
async fn given_empty_upload_when_extracting_then_returns_client_error() {
    let service = ExtractionService::new(Arc::new(EchoLoader));

    let err = service.extract(b"", &document(0)).await.unwrap_err();

    assert!(matches!(err, ExtractionError::EmptyUpload));
    assert!(err.is_client_error());
}

#[tokio::test]
async fn given_internal_loader_failure_when_extracting_then_is_server_error() {
    let service = ExtractionService::new(Arc::new(BrokenLoader));

    let err = service.extract(b"data", &document(4)).await.unwrap_err();

    assert!(!err.is_client_error());
}
