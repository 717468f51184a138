//! Shared router state.

use relay_application::GenerateTextUseCase;
use std::sync::Arc;
use thiserror::Error;

/// Why a use case could not be built for a request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// No API key available. Carries the user-facing message.
    #[error("{0}")]
    MissingCredential(String),

    #[error("{0}")]
    Setup(String),
}

/// Builds a [`GenerateTextUseCase`] for one request.
///
/// Credentials are resolved here rather than at startup, so a relay started
/// without a key still answers and picks the key up once it is set.
pub trait UseCaseProvider: Send + Sync {
    fn provide(&self) -> Result<GenerateTextUseCase, ProviderError>;
}

#[derive(Clone)]
pub struct RelayState {
    pub provider: Arc<dyn UseCaseProvider>,
}

impl RelayState {
    pub fn new(provider: Arc<dyn UseCaseProvider>) -> Self {
        Self { provider }
    }
}
