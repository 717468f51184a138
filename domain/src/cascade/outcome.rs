//! Final result of a model cascade

use serde::Serialize;

/// Outcome of running a prompt through the cascade
///
/// `Success` always carries trimmed, non-empty text; construct it through
/// [`CascadeOutcome::from_text`]. `Exhausted` carries the most recent failure
/// detail observed across all models tried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum CascadeOutcome {
    Success(String),
    Exhausted(String),
}

impl CascadeOutcome {
    /// Build a `Success` from extracted text, or `None` if it is blank.
    pub fn from_text(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(CascadeOutcome::Success(trimmed.to_string()))
        }
    }

    pub fn exhausted(detail: impl Into<String>) -> Self {
        CascadeOutcome::Exhausted(detail.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CascadeOutcome::Success(_))
    }

    /// Generated text, if the cascade succeeded
    pub fn text(&self) -> Option<&str> {
        match self {
            CascadeOutcome::Success(text) => Some(text),
            CascadeOutcome::Exhausted(_) => None,
        }
    }

    /// `Ok(text)` on success, `Err(last_detail)` on exhaustion
    pub fn into_result(self) -> Result<String, String> {
        match self {
            CascadeOutcome::Success(text) => Ok(text),
            CascadeOutcome::Exhausted(detail) => Err(detail),
        }
    }
}
