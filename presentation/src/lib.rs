//! Presentation layer for cascade-relay
//!
//! This crate contains the HTTP entrypoint, CLI definitions
//! and progress reporters.

pub mod cli;
pub mod http;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use http::{
    error::RelayHttpError,
    router::create_router,
    state::{ProviderError, RelayState, UseCaseProvider},
};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
