//! Backend configuration from TOML (`[backend]` section)

use relay_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Gemini API settings.
///
/// # Example
///
/// ```toml
/// [backend]
/// base_url = "https://generativelanguage.googleapis.com"
/// api_key_env = "GEMINI_API_KEY"
/// request_timeout_secs = 60
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Base URL of the Gemini REST API.
    pub base_url: String,
    /// Environment variable name for the API key (default: "GEMINI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Timeout for a single HTTP attempt, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            request_timeout_secs: 60,
        }
    }
}

impl FileBackendConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.request_timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidValue {
                    field: "backend.request_timeout_secs".to_string(),
                    value: "0".to_string(),
                },
                "backend.request_timeout_secs: must be greater than 0, using 60",
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidValue {
                    field: "backend.base_url".to_string(),
                    value: self.base_url.clone(),
                },
                format!(
                    "backend.base_url: '{}' is not an http(s) URL, using the default",
                    self.base_url
                ),
            ));
        }

        if self.api_key_env.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidValue {
                    field: "backend.api_key_env".to_string(),
                    value: self.api_key_env.clone(),
                },
                "backend.api_key_env: cannot be empty, using GEMINI_API_KEY",
            ));
        }

        if self.api_key.is_some() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::InvalidValue {
                    field: "backend.api_key".to_string(),
                    value: "***".to_string(),
                },
                "backend.api_key: storing the key in a config file is not recommended",
            ));
        }

        issues
    }

    /// Copy with every rejected field replaced by its default.
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        Self {
            base_url: if self.base_url.starts_with("http://")
                || self.base_url.starts_with("https://")
            {
                self.base_url.clone()
            } else {
                defaults.base_url
            },
            api_key_env: if self.api_key_env.trim().is_empty() {
                defaults.api_key_env
            } else {
                self.api_key_env.clone()
            },
            api_key: self.api_key.clone(),
            request_timeout_secs: if self.request_timeout_secs == 0 {
                defaults.request_timeout_secs
            } else {
                self.request_timeout_secs
            },
        }
    }
}
