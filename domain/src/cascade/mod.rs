//! Cascade domain: retry classification, backoff schedule, plans and outcomes.
//!
//! - [`attempt`]: classify one HTTP exchange and decide what happens next
//! - [`backoff`]: the fixed `2^n * 400ms` schedule
//! - [`plan`]: ordered candidate models
//! - [`outcome`]: `Success(text)` / `Exhausted(detail)`

pub mod attempt;
pub mod backoff;
pub mod outcome;
pub mod plan;
