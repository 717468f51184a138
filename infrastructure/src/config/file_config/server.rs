//! HTTP server configuration from TOML (`[server]` section)

use relay_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

pub const DEFAULT_BIND: &str = "127.0.0.1:8787";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Socket address to listen on.
    pub bind: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

impl FileServerConfig {
    /// Parse `bind`, falling back to the default address.
    pub fn parse_bind(&self) -> (SocketAddr, Vec<ConfigIssue>) {
        match self.bind.parse() {
            Ok(addr) => (addr, Vec::new()),
            Err(_) => {
                let issue = ConfigIssue::error(
                    ConfigIssueCode::InvalidValue {
                        field: "server.bind".to_string(),
                        value: self.bind.clone(),
                    },
                    format!(
                        "server.bind: '{}' is not a socket address, using {}",
                        self.bind, DEFAULT_BIND
                    ),
                );
                (default_bind(), vec![issue])
            }
        }
    }
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8787))
}
