//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into domain/application
//! types by the `parse_*` / `to_*` helpers, which report problems as
//! [`ConfigIssue`]s instead of failing.

mod backend;
mod cascade;
mod server;

pub use backend::FileBackendConfig;
pub use cascade::FileCascadeConfig;
pub use server::{DEFAULT_BIND, FileServerConfig};

use relay_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP entrypoint settings
    pub server: FileServerConfig,
    /// Gemini API settings
    pub backend: FileBackendConfig,
    /// Default model priority
    pub cascade: FileCascadeConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.server.parse_bind().1);
        issues.extend(self.backend.validate());
        issues.extend(self.cascade.parse_models().1);
        issues
    }
}
