use std::sync::Arc;

use crate::application::ports::TextSimplifier;
use crate::domain::{MaskedText, SimplifyAuditEntry, SimplifyOutcome, SimplifyStatus};

use super::numeric_protection::{mask_numerics, numerics_unchanged, restore_placeholders};

/// Runs a simplifier over numerically masked text and refuses any result that
/// altered, dropped or reordered a numeric value.
pub struct SimplifyService {
    simplifier: Arc<dyn TextSimplifier>,
}

impl SimplifyService {
    pub fn new(simplifier: Arc<dyn TextSimplifier>) -> Self {
        Self { simplifier }
    }

    #[tracing::instrument(skip(self, text), fields(text_chars = text.chars().count()))]
    pub async fn simplify(&self, text: &str) -> SimplifyOutcome {
        let MaskedText {
            masked,
            placeholders,
        } = mask_numerics(text);

        tracing::debug!(placeholders = placeholders.len(), "Masked numeric values");

        let simplified = match self.simplifier.simplify(&masked).await {
            Ok(simplified) => simplified,
            Err(e) => {
                tracing::warn!(error = %e, "Simplifier failed, returning original text");
                return SimplifyOutcome {
                    status: SimplifyStatus::Rejected,
                    simplified_masked: masked.clone(),
                    masked_text: masked,
                    final_text: text.to_string(),
                    audit: vec![
                        SimplifyAuditEntry::Error {
                            error: e.to_string(),
                        },
                        SimplifyAuditEntry::rejected(),
                    ],
                };
            }
        };

        if !numerics_unchanged(&masked, &simplified) {
            tracing::warn!("Numeric protection check failed, rejecting simplification");
            return SimplifyOutcome {
                status: SimplifyStatus::Rejected,
                masked_text: masked,
                simplified_masked: simplified,
                final_text: text.to_string(),
                audit: vec![
                    SimplifyAuditEntry::numeric_protection(false),
                    SimplifyAuditEntry::rejected(),
                ],
            };
        }

        let final_text = restore_placeholders(&simplified, &placeholders);

        SimplifyOutcome {
            status: SimplifyStatus::Ok,
            masked_text: masked,
            simplified_masked: simplified,
            final_text,
            audit: vec![
                SimplifyAuditEntry::numeric_protection(true),
                SimplifyAuditEntry::accepted(),
            ],
        }
    }
}
