//! Cascade parameters: which models a run may fall back across.
//!
//! [`CascadeParams`] is the application-layer view of the `[cascade]`
//! configuration section. The backoff schedule is deliberately absent: it is
//! fixed in [`BackoffPolicy`](relay_domain::BackoffPolicy).

use relay_domain::Model;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeParams {
    /// Default priority order, used when the caller does not override it.
    pub models: Vec<Model>,
}

impl Default for CascadeParams {
    fn default() -> Self {
        Self {
            models: Model::default_cascade(),
        }
    }
}

impl CascadeParams {
    pub fn with_models(mut self, models: Vec<Model>) -> Self {
        self.models = models;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_builtin_cascade() {
        assert_eq!(CascadeParams::default().models, Model::default_cascade());
    }

    #[test]
    fn test_with_models() {
        let params = CascadeParams::default().with_models(vec![Model::Gemini25Pro]);
        assert_eq!(params.models, vec![Model::Gemini25Pro]);
    }
}
