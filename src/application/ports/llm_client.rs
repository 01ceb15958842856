use async_trait::async_trait;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Answers `prompt` using the supplied document `context`.
    async fn complete(&self, prompt: &str, context: &str) -> Result<String, LlmClientError>;

    /// Answers `prompt` as a general educational question, without document context.
    async fn complete_general(&self, prompt: &str) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
