use std::sync::Arc;

use tokio::net::TcpListener;

use medease::application::ports::{FileLoader, OcrEngine};
use medease::application::services::{ExtractionService, QaService, SimplifyService};
use medease::infrastructure::llm::OpenAiClient;
use medease::infrastructure::observability::{TracingConfig, init_tracing};
use medease::infrastructure::ocr::TesseractCliEngine;
use medease::infrastructure::text_processing::{
    FallbackFileLoader, ImageOcrAdapter, PassthroughSimplifier, PdfOcrAdapter, PdfRenderOptions,
    SentencePackingSplitter,
};
use medease::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(
        &TracingConfig::from_settings(environment, &settings.logging),
        settings.server.port,
    )?;

    tracing::info!(environment = %environment, "Configuration loaded");

    let ocr_engine: Arc<dyn OcrEngine> = Arc::new(TesseractCliEngine::new(
        settings.ocr.tesseract_path.clone(),
        settings.ocr.language.clone(),
    ));

    let image_loader: Arc<dyn FileLoader> =
        Arc::new(ImageOcrAdapter::new(Arc::clone(&ocr_engine)));
    let pdf_loader: Arc<dyn FileLoader> = Arc::new(PdfOcrAdapter::new(
        Arc::clone(&ocr_engine),
        PdfRenderOptions::from(&settings.ocr),
    ));
    let file_loader = Arc::new(FallbackFileLoader::new(vec![image_loader, pdf_loader]));

    let llm_client = OpenAiClient::from_settings(&settings.llm).map(Arc::new);
    if llm_client.is_none() {
        tracing::warn!("No OpenAI API key configured, Q&A runs in local-only mode");
    }

    let splitter = Arc::new(SentencePackingSplitter::new(settings.qa.max_chunk_chars));

    let state = AppState {
        extraction_service: Arc::new(ExtractionService::new(file_loader)),
        qa_service: Arc::new(QaService::new(
            llm_client,
            splitter,
            settings.qa.top_k,
            settings.qa.snippet_chars,
        )),
        simplify_service: Arc::new(SimplifyService::new(Arc::new(PassthroughSimplifier))),
        max_upload_bytes: settings.upload.max_file_size_bytes(),
    };

    let router = create_router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
