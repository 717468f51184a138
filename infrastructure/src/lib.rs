//! Infrastructure layer for cascade-relay
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, RuntimeConfig};
pub use gemini::{
    credentials::{ApiKey, CredentialError, CredentialResolver},
    transport::{GeminiSettings, GeminiTransport},
};
