use std::fmt;

use serde::{Deserialize, Serialize};

/// Answer-composition policy for a question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum QaMode {
    /// Answer only from retrieved document snippets.
    #[default]
    Grounded,
    /// Ask the language model a general question, ignoring the document.
    Related,
    /// Prefer the document; expand with the language model on a weak match.
    Hybrid,
}

impl QaMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grounded => "grounded",
            Self::Related => "related",
            Self::Hybrid => "hybrid",
        }
    }
}

impl TryFrom<&str> for QaMode {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "grounded" => Ok(Self::Grounded),
            "related" => Ok(Self::Related),
            "hybrid" => Ok(Self::Hybrid),
            other => Err(format!(
                "Invalid mode: {}. Expected: grounded, related, or hybrid",
                other
            )),
        }
    }
}

impl TryFrom<String> for QaMode {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}

impl fmt::Display for QaMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
