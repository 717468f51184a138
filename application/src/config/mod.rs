//! Application-level configuration.
//!
//! - [`CascadeParams`]: default model priority for the cascade

pub mod cascade_params;

pub use cascade_params::CascadeParams;
