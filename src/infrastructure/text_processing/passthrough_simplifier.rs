use async_trait::async_trait;

use crate::application::ports::{SimplifierError, TextSimplifier};

/// Returns the masked text unchanged. No model is involved.
pub struct PassthroughSimplifier;

#[async_trait]
impl TextSimplifier for PassthroughSimplifier {
    async fn simplify(&self, masked_text: &str) -> Result<String, SimplifierError> {
        Ok(masked_text.to_string())
    }
}
