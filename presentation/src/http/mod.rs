//! HTTP entrypoint
//!
//! - [`router::create_router`]: axum router with CORS and request tracing
//! - [`handlers`]: request parsing and outcome mapping
//! - [`state::UseCaseProvider`]: builds the cascade per request
//! - [`error::RelayHttpError`]: JSON error responses

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
