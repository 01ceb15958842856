use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;
use crate::application::services::{DEFAULT_SNIPPET_CHARS, DEFAULT_TOP_K};
use crate::infrastructure::observability::DEFAULT_LOG_DIRECTIVES;
use crate::infrastructure::text_processing::DEFAULT_MAX_CHUNK_CHARS;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub qa: QaSettings,
    pub llm: LlmSettings,
    pub ocr: OcrSettings,
    pub upload: UploadSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QaSettings {
    pub top_k: usize,
    pub max_chunk_chars: usize,
    pub snippet_chars: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub chat_model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl LlmSettings {
    /// The configured key, falling back to `OPENAI_API_KEY`. Blank keys count as absent.
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OcrSettings {
    pub tesseract_path: String,
    pub language: String,
    pub pdf_render_dpi: f32,
    pub pdf_max_pages: usize,
    pub pdfium_library_dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub max_file_size_mb: usize,
}

impl UploadSettings {
    pub fn max_file_size_bytes(&self) -> usize {
        self.max_file_size_mb * 1024 * 1024
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Layers built-in defaults, `appsettings.{environment}.toml` (optional) and
    /// `APP__SECTION__KEY` environment variables, in that order.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000_i64)?
            .set_default("qa.top_k", DEFAULT_TOP_K as i64)?
            .set_default("qa.max_chunk_chars", DEFAULT_MAX_CHUNK_CHARS as i64)?
            .set_default("qa.snippet_chars", DEFAULT_SNIPPET_CHARS as i64)?
            .set_default("llm.base_url", "https://api.openai.com/v1")?
            .set_default("llm.chat_model", "gpt-4o-mini")?
            .set_default("llm.max_tokens", 400_i64)?
            .set_default("llm.temperature", 0.0_f64)?
            .set_default("ocr.tesseract_path", "tesseract")?
            .set_default("ocr.language", "eng")?
            .set_default("ocr.pdf_render_dpi", 200.0_f64)?
            .set_default("ocr.pdf_max_pages", 50_i64)?
            .set_default("upload.max_file_size_mb", 20_i64)?
            .set_default("logging.level", DEFAULT_LOG_DIRECTIVES)?
            .set_default("logging.enable_json", false)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
