use std::sync::Arc;

use medease::application::ports::{SimplifierError, TextSimplifier};
use medease::application::services::SimplifyService;
use medease::domain::{SimplifyAuditEntry, SimplifyStatus};
use medease::infrastructure::text_processing::PassthroughSimplifier;

struct WordSwapSimplifier;

#[async_trait::async_trait]
impl TextSimplifier for WordSwapSimplifier {
    async fn simplify(&self, masked_text: &str) -> Result<String, SimplifierError> {
        Ok(masked_text.replace("hypertension", "high blood pressure"))
    }
}

struct NumberDroppingSimplifier;

#[async_trait::async_trait]
impl TextSimplifier for NumberDroppingSimplifier {
    async fn simplify(&self, _masked_text: &str) -> Result<String, SimplifierError> {
        Ok("Your blood pressure is high.".to_string())
    }
}

struct FailingSimplifier;

#[async_trait::async_trait]
impl TextSimplifier for FailingSimplifier {
    async fn simplify(&self, _masked_text: &str) -> Result<String, SimplifierError> {
        Err(SimplifierError::Failed("model offline".to_string()))
    }
}

const TEXT: &str = "Stage 2 hypertension, BP 150/95.";

#[tokio::test]
async fn given_passthrough_simplifier_when_simplifying_then_returns_original_text() {
    let service = SimplifyService::new(Arc::new(PassthroughSimplifier));

    let outcome = service.simplify(TEXT).await;

    assert_eq!(outcome.status, SimplifyStatus::Ok);
    assert_eq!(outcome.masked_text, "Stage [NUM_0] hypertension, BP [NUM_1]");
    assert_eq!(outcome.final_text, TEXT);
    assert_eq!(
        outcome.audit,
        vec![
            SimplifyAuditEntry::numeric_protection(true),
            SimplifyAuditEntry::accepted()
        ]
    );
}

#[tokio::test]
async fn given_simplifier_keeping_placeholders_when_simplifying_then_restores_numbers() {
    let service = SimplifyService::new(Arc::new(WordSwapSimplifier));

    let outcome = service.simplify(TEXT).await;

    assert_eq!(outcome.status, SimplifyStatus::Ok);
    assert_eq!(
        outcome.simplified_masked,
        "Stage [NUM_0] high blood pressure, BP [NUM_1]"
    );
    assert_eq!(outcome.final_text, "Stage 2 high blood pressure, BP 150/95.");
}

#[tokio::test]
async fn given_simplifier_dropping_numbers_when_simplifying_then_rejects_and_keeps_original() {
    let service = SimplifyService::new(Arc::new(NumberDroppingSimplifier));

    let outcome = service.simplify(TEXT).await;

    assert_eq!(outcome.status, SimplifyStatus::Rejected);
    assert_eq!(outcome.final_text, TEXT);
    assert_eq!(outcome.simplified_masked, "Your blood pressure is high.");
    assert_eq!(
        outcome.audit,
        vec![
            SimplifyAuditEntry::numeric_protection(false),
            SimplifyAuditEntry::rejected()
        ]
    );
}

#[tokio::test]
async fn given_failing_simplifier_when_simplifying_then_rejects_with_error_entry() {
    let service = SimplifyService::new(Arc::new(FailingSimplifier));

    let outcome = service.simplify(TEXT).await;

    assert_eq!(outcome.status, SimplifyStatus::Rejected);
    assert_eq!(outcome.final_text, TEXT);
    assert!(matches!(
        &outcome.audit[0],
        SimplifyAuditEntry::Error { error } if error.contains("model offline")
    ));
    assert_eq!(outcome.audit[1], SimplifyAuditEntry::rejected());
}

#[tokio::test]
async fn given_text_without_numbers_when_simplifying_then_accepts() {
    let service = SimplifyService::new(Arc::new(PassthroughSimplifier));

    let outcome = service.simplify("Rest and hydrate.").await;

    assert_eq!(outcome.status, SimplifyStatus::Ok);
    assert_eq!(outcome.final_text, "Rest and hydrate.");
}
