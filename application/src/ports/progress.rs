//! Progress notification port
//!
//! Defines the interface for reporting progress while a cascade runs.

use relay_domain::Model;
use std::time::Duration;

/// Callback for progress updates during a cascade
///
/// Implementations live in the presentation layer. Every method has a no-op
/// default so reporters only override what they display.
pub trait CascadeProgressNotifier: Send + Sync {
    /// Called before the first attempt against `model`
    fn on_model_start(&self, _model: &Model, _index: usize, _total: usize) {}

    /// Called before each HTTP attempt (1-based)
    fn on_attempt(&self, _model: &Model, _attempt: u32) {}

    /// Called when a retryable status schedules another attempt
    fn on_retry_scheduled(&self, _model: &Model, _attempt: u32, _delay: Duration) {}

    /// Called when a model is given up on
    fn on_model_failed(&self, _model: &Model, _detail: &str) {}

    /// Called when a model produced usable text
    fn on_success(&self, _model: &Model) {}

    /// Called when every candidate failed
    fn on_exhausted(&self, _last_detail: &str) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoCascadeProgress;

impl CascadeProgressNotifier for NoCascadeProgress {}
