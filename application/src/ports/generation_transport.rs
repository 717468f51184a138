//! Generation transport port
//!
//! Defines the single HTTP exchange the retrier performs against a backend
//! model endpoint. Implementations (adapters) live in the infrastructure layer.

use async_trait::async_trait;
use relay_domain::{GenerateRequest, Model};
use std::time::Duration;
use thiserror::Error;

/// Network-level failures. The retrier treats all of these as terminal for
/// the current model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("timed out after {0:?}")]
    Timeout(Duration),

    #[error("failed to encode request: {0}")]
    Encode(String),

    #[error("{0}")]
    Other(String),
}

/// Raw response of one exchange: status code and body text.
///
/// Non-2xx statuses are *not* errors at this level; classifying them is the
/// retrier's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// One POST to one model endpoint.
#[async_trait]
pub trait GenerationTransport: Send + Sync {
    async fn send(
        &self,
        model: &Model,
        request: &GenerateRequest,
    ) -> Result<TransportResponse, TransportError>;
}
