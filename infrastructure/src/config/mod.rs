//! Configuration file loading for cascade-relay
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `RELAY_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./relay.toml` or `./.relay.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/cascade-relay/config.toml`
//! 5. Default values

mod file_config;
mod loader;
mod runtime;

pub use file_config::{
    DEFAULT_BIND, FileBackendConfig, FileCascadeConfig, FileConfig, FileServerConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
pub use runtime::RuntimeConfig;
