//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: backend model identifiers (Gemini variants or custom)
//! - [`prompt::Prompt`]: a validated, non-blank prompt
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod prompt;
