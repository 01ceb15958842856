use crate::application::ports::{LlmClient, LlmClientError};

/// Canned client for tests and offline runs: always answers with the same text
/// or always fails with the same message.
pub struct MockLlmClient {
    reply: Result<String, String>,
}

impl MockLlmClient {
    pub fn answering(answer: &str) -> Self {
        Self {
            reply: Ok(answer.to_string()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
        }
    }

    fn reply(&self) -> Result<String, LlmClientError> {
        self.reply
            .clone()
            .map_err(LlmClientError::ApiRequestFailed)
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, _prompt: &str, _context: &str) -> Result<String, LlmClientError> {
        self.reply()
    }

    async fn complete_general(&self, _prompt: &str) -> Result<String, LlmClientError> {
        self.reply()
    }
}
