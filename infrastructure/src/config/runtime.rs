//! Conversion of the raw file config into the settings the relay runs with.

use super::file_config::FileConfig;
use crate::gemini::credentials::CredentialResolver;
use crate::gemini::transport::GeminiSettings;
use relay_application::CascadeParams;
use relay_domain::ConfigIssue;
use std::net::SocketAddr;
use std::time::Duration;

/// Validated settings, with every rejected value replaced by its default.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind: SocketAddr,
    pub gemini: GeminiSettings,
    pub cascade: CascadeParams,
    pub credentials: CredentialResolver,
}

impl RuntimeConfig {
    /// Build from a loaded [`FileConfig`], returning every issue found.
    pub fn from_file(config: &FileConfig) -> (Self, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        let (bind, bind_issues) = config.server.parse_bind();
        issues.extend(bind_issues);

        issues.extend(config.backend.validate());
        let backend = config.backend.sanitized();

        let (cascade, cascade_issues) = config.cascade.to_params();
        issues.extend(cascade_issues);

        let runtime = Self {
            bind,
            gemini: GeminiSettings {
                base_url: backend.base_url,
                request_timeout: Duration::from_secs(backend.request_timeout_secs),
            },
            cascade,
            credentials: CredentialResolver::new(backend.api_key, backend.api_key_env),
        };
        (runtime, issues)
    }
}
