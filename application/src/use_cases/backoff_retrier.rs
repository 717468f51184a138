//! Backoff retrier.
//!
//! Performs one logical call against one model endpoint. Transient statuses
//! (429/500/502/503/504) are retried following [`BackoffPolicy`]; any other
//! non-2xx status, and any network failure, ends the call immediately.
//! Resilience across models is the cascade's job, not this one's.

use crate::ports::generation_transport::{GenerationTransport, TransportError};
use crate::ports::progress::CascadeProgressNotifier;
use crate::ports::sleeper::Sleeper;
use relay_domain::{BackoffPolicy, CallAttempt, GenerateRequest, Model, RetryDecision};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Why a model call produced no payload
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RetryError {
    /// Non-retryable status on some attempt
    #[error("Gemini API error: {detail}")]
    Terminal { status: u16, detail: String },

    /// Retryable status on every attempt of the budget
    #[error("Gemini API error after retries: {detail}")]
    Exhausted {
        status: u16,
        attempts: u32,
        detail: String,
    },

    #[error("Gemini API request failed: {0}")]
    Transport(#[from] TransportError),

    /// 2xx status whose body is not JSON
    #[error("Gemini API returned malformed JSON: {0}")]
    MalformedBody(String),
}

impl RetryError {
    /// HTTP status of the last exchange, if one completed
    pub fn status(&self) -> Option<u16> {
        match self {
            RetryError::Terminal { status, .. } | RetryError::Exhausted { status, .. } => {
                Some(*status)
            }
            RetryError::Transport(_) => None,
            RetryError::MalformedBody(_) => None,
        }
    }
}

/// Retries a single model call with exponential backoff.
#[derive(Clone)]
pub struct BackoffRetrier {
    transport: Arc<dyn GenerationTransport>,
    sleeper: Arc<dyn Sleeper>,
    policy: BackoffPolicy,
}

impl BackoffRetrier {
    pub fn new(transport: Arc<dyn GenerationTransport>, sleeper: Arc<dyn Sleeper>) -> Self {
        Self {
            transport,
            sleeper,
            policy: BackoffPolicy::standard(),
        }
    }

    pub fn policy(&self) -> &BackoffPolicy {
        &self.policy
    }

    /// Call `model` until it answers 2xx, fails terminally, or the attempt
    /// budget runs out. Returns the parsed success payload.
    pub async fn call(
        &self,
        model: &Model,
        request: &GenerateRequest,
        progress: &dyn CascadeProgressNotifier,
    ) -> Result<Value, RetryError> {
        let mut number = 0;
        loop {
            number += 1;
            progress.on_attempt(model, number);

            let response = self.transport.send(model, request).await?;
            let attempt = CallAttempt::from_response(number, response.status, &response.body);
            debug!(
                model = %model,
                attempt = attempt.number,
                status = attempt.http_status,
                class = %attempt.status,
                "Backend attempt finished"
            );

            match attempt.decide(&self.policy) {
                RetryDecision::Accept => {
                    return serde_json::from_str(&response.body)
                        .map_err(|e| RetryError::MalformedBody(e.to_string()));
                }
                RetryDecision::RetryAfter(delay) => {
                    warn!(
                        model = %model,
                        attempt = attempt.number,
                        status = attempt.http_status,
                        "Transient backend failure, retrying in {}ms",
                        delay.as_millis()
                    );
                    progress.on_retry_scheduled(model, attempt.number, delay);
                    self.sleeper.sleep(delay).await;
                }
                RetryDecision::Abort => {
                    return Err(RetryError::Terminal {
                        status: attempt.http_status,
                        detail: attempt.detail,
                    });
                }
                RetryDecision::Exhausted => {
                    return Err(RetryError::Exhausted {
                        status: attempt.http_status,
                        attempts: attempt.number,
                        detail: attempt.detail,
                    });
                }
            }
        }
    }
}
