//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No models configured for the cascade")]
    NoModels,

    #[error("Invalid prompt: {0}")]
    InvalidPrompt(String),

    #[error("Invalid model: {0}")]
    InvalidModel(String),
}
