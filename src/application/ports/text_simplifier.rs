use async_trait::async_trait;

/// Rewrites numerically masked text into plainer language.
///
/// Implementations receive text whose numeric values are already replaced by
/// `[NUM_i]` placeholders and must leave those placeholders intact.
#[async_trait]
pub trait TextSimplifier: Send + Sync {
    async fn simplify(&self, masked_text: &str) -> Result<String, SimplifierError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SimplifierError {
    #[error("simplification failed: {0}")]
    Failed(String),
}
