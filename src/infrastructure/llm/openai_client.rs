use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{LlmClient, LlmClientError};
use crate::presentation::config::LlmSettings;

const GROUNDED_SYSTEM_PROMPT: &str = "You answer using ONLY the provided document context when possible. \
If the question is outside the context, say so politely. \
Do NOT give medical advice or instructions.";

const GENERAL_SYSTEM_PROMPT: &str = "Provide general educational information. \
Do NOT give personalized medical advice.";

/// Chat-completions client for OpenAI-compatible endpoints.
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl ChatMessage {
    fn system(content: &str) -> Self {
        Self {
            role: "system".to_string(),
            content: content.to_string(),
        }
    }

    fn user(content: String) -> Self {
        Self {
            role: "user".to_string(),
            content,
        }
    }
}

impl OpenAiClient {
    pub fn new(api_key: String, settings: &LlmSettings) -> Self {
        Self {
            client: Client::new(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key,
            model: settings.chat_model.clone(),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
        }
    }

    /// Builds a client only when an API key is configured.
    pub fn from_settings(settings: &LlmSettings) -> Option<Self> {
        settings
            .resolved_api_key()
            .map(|api_key| Self::new(api_key, settings))
    }

    async fn chat(&self, messages: Vec<ChatMessage>) -> Result<String, LlmClientError> {
        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmClientError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| LlmClientError::InvalidResponse("empty choices".to_string()))
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    #[tracing::instrument(skip_all, fields(model = %self.model, context_chars = context.len()))]
    async fn complete(&self, prompt: &str, context: &str) -> Result<String, LlmClientError> {
        let user = format!("Context:\n{context}\n\nQuestion: {prompt}\n\nAnswer concisely.");
        self.chat(vec![
            ChatMessage::system(GROUNDED_SYSTEM_PROMPT),
            ChatMessage::user(user),
        ])
        .await
    }

    #[tracing::instrument(skip_all, fields(model = %self.model))]
    async fn complete_general(&self, prompt: &str) -> Result<String, LlmClientError> {
        self.chat(vec![
            ChatMessage::system(GENERAL_SYSTEM_PROMPT),
            ChatMessage::user(prompt.to_string()),
        ])
        .await
    }
}
