//! Fixed exponential backoff schedule for per-model retries

use std::time::Duration;

/// Attempt budget for one model call.
pub const MAX_ATTEMPTS: u32 = 3;

/// Base unit of the backoff schedule.
pub const BASE_DELAY: Duration = Duration::from_millis(400);

/// Non-jittered exponential backoff (Value Object)
///
/// The delay inserted after a retryable failure of attempt `n` (1-based)
/// is `2^n * 400ms`, so the standard budget of three attempts waits
/// 800ms before attempt 2 and 1600ms before attempt 3. Nothing is slept
/// after the final attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackoffPolicy {
    max_attempts: u32,
    base_delay: Duration,
}

impl BackoffPolicy {
    /// The schedule used for every backend call.
    pub const fn standard() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            base_delay: BASE_DELAY,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay to wait after attempt `attempt` failed with a retryable status.
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let factor = 1u32 << attempt.min(16);
        self.base_delay.saturating_mul(factor)
    }

    /// Whether another attempt may follow attempt `attempt`.
    pub fn has_attempts_left(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }

    /// Every delay the policy can insert, in order.
    pub fn schedule(&self) -> Vec<Duration> {
        (1..self.max_attempts).map(|n| self.delay_after(n)).collect()
    }
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self::standard()
    }
}
