use medease::application::services::{DEFAULT_SNIPPET_CHARS, DEFAULT_TOP_K};
use medease::infrastructure::llm::OpenAiClient;
use medease::infrastructure::observability::DEFAULT_LOG_DIRECTIVES;
use medease::presentation::config::{Environment, LlmSettings, Settings, UploadSettings};

fn llm_settings(api_key: Option<&str>) -> LlmSettings {
    LlmSettings {
        api_key: api_key.map(String::from),
        base_url: "https://api.openai.com/v1".to_string(),
        chat_model: "gpt-4o-mini".to_string(),
        max_tokens: 400,
        temperature: 0.0,
    }
}

#[test]
fn given_no_settings_file_when_loading_then_uses_defaults() {
    let settings = Settings::load(Environment::Test).unwrap();

    assert_eq!(settings.qa.top_k, DEFAULT_TOP_K);
    assert_eq!(settings.qa.max_chunk_chars, 800);
    assert_eq!(settings.qa.snippet_chars, DEFAULT_SNIPPET_CHARS);
    assert_eq!(settings.logging.level, DEFAULT_LOG_DIRECTIVES);
    assert_eq!(settings.llm.chat_model, "gpt-4o-mini");
    assert_eq!(settings.ocr.language, "eng");
    assert!(settings.ocr.pdfium_library_dir.is_none());
}

#[test]
fn given_upload_limit_in_megabytes_when_converting_then_returns_bytes() {
    let upload = UploadSettings {
        max_file_size_mb: 2,
    };

    assert_eq!(upload.max_file_size_bytes(), 2 * 1024 * 1024);
}

#[test]
fn given_configured_api_key_when_resolving_then_trims_it() {
    let llm = llm_settings(Some("  sk-test  "));

    assert_eq!(llm.resolved_api_key().as_deref(), Some("sk-test"));
}

#[test]
fn given_blank_api_key_when_resolving_then_treats_it_as_absent() {
    let llm = llm_settings(Some("   "));

    assert_eq!(llm.resolved_api_key(), None);
}

#[test]
fn given_blank_api_key_when_building_client_then_no_client_is_created() {
    let llm = llm_settings(Some("   "));

    assert!(OpenAiClient::from_settings(&llm).is_none());
}

#[test]
fn given_configured_api_key_when_building_client_then_client_is_created() {
    let llm = llm_settings(Some("sk-test"));

    assert!(OpenAiClient::from_settings(&llm).is_some());
}
