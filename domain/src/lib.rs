//! Domain layer for cascade-relay
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Cascade
//!
//! A prompt is tried against an ordered list of models ([`CascadePlan`]).
//! The first model that yields non-blank text wins; otherwise the run ends
//! [`CascadeOutcome::Exhausted`] with the last failure detail.
//!
//! ## Backoff
//!
//! Each model call is retried on transient statuses (429/500/502/503/504)
//! following the fixed [`BackoffPolicy`]. Every [`CallAttempt`] is classified
//! and turned into a [`RetryDecision`].

pub mod cascade;
pub mod config;
pub mod core;
pub mod generation;
pub mod util;

// Re-export commonly used types
pub use cascade::{
    attempt::{AttemptStatus, CallAttempt, RETRYABLE_STATUSES, RetryDecision},
    backoff::BackoffPolicy,
    outcome::CascadeOutcome,
    plan::CascadePlan,
};
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::{error::DomainError, model::Model, prompt::Prompt};
pub use generation::{extract::extract_text, request::GenerateRequest};
