use medease::domain::SimplifyAuditEntry;
use serde_json::json;

#[test]
fn given_check_entry_when_serialized_then_has_check_and_passed() {
    let value = serde_json::to_value(SimplifyAuditEntry::numeric_protection(true)).unwrap();

    assert_eq!(value, json!({"check": "numeric_protection", "passed": true}));
}

#[test]
fn given_action_entry_when_serialized_then_has_action_only() {
    let value = serde_json::to_value(SimplifyAuditEntry::rejected()).unwrap();

    assert_eq!(value, json!({"action": "rejected"}));
}

#[test]
fn given_error_entry_when_serialized_then_has_error_only() {
    let entry = SimplifyAuditEntry::Error {
        error: "model down".to_string(),
    };

    let value = serde_json::to_value(entry).unwrap();

    assert_eq!(value, json!({"error": "model down"}));
}
