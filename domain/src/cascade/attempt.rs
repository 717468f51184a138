//! Per-attempt classification and the retry decision derived from it

use super::backoff::BackoffPolicy;
use std::time::Duration;

/// HTTP statuses that indicate a transient backend condition.
pub const RETRYABLE_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];

/// Classification of one backend HTTP exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptStatus {
    /// 2xx, the payload can be handed to the extractor
    Success,
    /// Rate limiting or server overload, worth retrying
    Retryable,
    /// Any other non-2xx status, retrying will not help
    Terminal,
}

impl AttemptStatus {
    pub fn classify(http_status: u16) -> Self {
        if (200..300).contains(&http_status) {
            AttemptStatus::Success
        } else if RETRYABLE_STATUSES.contains(&http_status) {
            AttemptStatus::Retryable
        } else {
            AttemptStatus::Terminal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttemptStatus::Success => "success",
            AttemptStatus::Retryable => "retryable",
            AttemptStatus::Terminal => "terminal",
        }
    }
}

impl std::fmt::Display for AttemptStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What the retrier does after an attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryDecision {
    /// The response is usable as-is
    Accept,
    /// Wait, then try the same model again
    RetryAfter(Duration),
    /// Non-retryable status; stop immediately
    Abort,
    /// Retryable status but the attempt budget is spent
    Exhausted,
}

/// Record of one HTTP exchange with the backend
///
/// Lives only long enough to pick the next [`RetryDecision`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallAttempt {
    /// 1-based attempt number
    pub number: u32,
    pub http_status: u16,
    pub status: AttemptStatus,
    /// `"<status> <body>"`, used in error messages
    pub detail: String,
}

impl CallAttempt {
    pub fn from_response(number: u32, http_status: u16, body: &str) -> Self {
        Self {
            number,
            http_status,
            status: AttemptStatus::classify(http_status),
            detail: format!("{} {}", http_status, body),
        }
    }

    pub fn decide(&self, policy: &BackoffPolicy) -> RetryDecision {
        match self.status {
            AttemptStatus::Success => RetryDecision::Accept,
            AttemptStatus::Terminal => RetryDecision::Abort,
            AttemptStatus::Retryable if policy.has_attempts_left(self.number) => {
                RetryDecision::RetryAfter(policy.delay_after(self.number))
            }
            AttemptStatus::Retryable => RetryDecision::Exhausted,
        }
    }
}
