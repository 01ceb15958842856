use serde::Serialize;

use super::qa_mode::QaMode;

/// Which path produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerMethod {
    Local,
    OpenAi,
    LocalFallback,
    LocalOnly,
    HybridOpenAi,
    Refusal,
}

impl AnswerMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::OpenAi => "openai",
            Self::LocalFallback => "local_fallback",
            Self::LocalOnly => "local_only",
            Self::HybridOpenAi => "hybrid_openai",
            Self::Refusal => "refusal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRef {
    pub index: usize,
    pub snippet: String,
}

/// Decision-path annotation returned with every answer. Only the fields set
/// for a given path are serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QaAudit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<QaMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openai_used: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openai: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QaAudit {
    pub fn blocked(reason: &str) -> Self {
        Self {
            reason: Some(reason.to_string()),
            ..Self::default()
        }
    }

    pub fn for_mode(mode: QaMode) -> Self {
        Self {
            mode: Some(mode),
            ..Self::default()
        }
    }

    pub fn with_reason(mut self, reason: &str) -> Self {
        self.reason = Some(reason.to_string());
        self
    }

    pub fn with_openai_used(mut self) -> Self {
        self.openai_used = Some(true);
        self
    }

    pub fn without_openai(mut self) -> Self {
        self.openai = Some(false);
        self
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QaAnswer {
    pub answer: String,
    pub sources: Vec<SourceRef>,
    pub method: AnswerMethod,
    pub confidence: f32,
    pub audit: QaAudit,
}
