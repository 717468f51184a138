//! Application layer for cascade-relay
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::CascadeParams;
pub use ports::{
    generation_transport::{GenerationTransport, TransportError, TransportResponse},
    progress::{CascadeProgressNotifier, NoCascadeProgress},
    sleeper::{Sleeper, TokioSleeper},
};
pub use use_cases::backoff_retrier::{BackoffRetrier, RetryError};
pub use use_cases::generate_text::{GenerateTextInput, GenerateTextUseCase};
