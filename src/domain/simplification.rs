use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimplifyStatus {
    Ok,
    Rejected,
}

impl SimplifyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SimplifyAuditEntry {
    Check { check: &'static str, passed: bool },
    Action { action: &'static str },
    Error { error: String },
}

impl SimplifyAuditEntry {
    pub fn numeric_protection(passed: bool) -> Self {
        Self::Check {
            check: "numeric_protection",
            passed,
        }
    }

    pub fn accepted() -> Self {
        Self::Action { action: "accepted" }
    }

    pub fn rejected() -> Self {
        Self::Action { action: "rejected" }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimplifyOutcome {
    pub status: SimplifyStatus,
    pub masked_text: String,
    pub simplified_masked: String,
    pub final_text: String,
    pub audit: Vec<SimplifyAuditEntry>,
}
