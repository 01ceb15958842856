use medease::domain::{QaAudit, QaMode};
use serde_json::json;

#[test]
fn given_blocked_audit_when_serialized_then_only_reason_is_present() {
    let value = serde_json::to_value(QaAudit::blocked("medical_advice_blocked")).unwrap();

    assert_eq!(value, json!({"reason": "medical_advice_blocked"}));
}

#[test]
fn given_mode_audit_without_model_when_serialized_then_reports_openai_false() {
    let value = serde_json::to_value(QaAudit::for_mode(QaMode::Hybrid).without_openai()).unwrap();

    assert_eq!(value, json!({"mode": "hybrid", "openai": false}));
}

#[test]
fn given_mode_audit_with_error_when_serialized_then_includes_error_text() {
    let audit = QaAudit::for_mode(QaMode::Related).with_error("timeout".to_string());

    let value = serde_json::to_value(audit).unwrap();

    assert_eq!(value, json!({"mode": "related", "error": "timeout"}));
}
