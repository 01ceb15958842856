use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryLevel {
    OneLine,
    #[default]
    Bullets,
    Detailed,
}

impl SummaryLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneLine => "one_line",
            Self::Bullets => "bullets",
            Self::Detailed => "detailed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryAudit {
    pub source: &'static str,
    pub ai_used: bool,
}

impl SummaryAudit {
    pub fn local() -> Self {
        Self {
            source: "local",
            ai_used: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub level: SummaryLevel,
    pub summary: String,
    pub audit: SummaryAudit,
}
