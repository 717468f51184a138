//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod backoff_retrier;
pub mod generate_text;

#[cfg(test)]
pub(crate) mod test_support;
