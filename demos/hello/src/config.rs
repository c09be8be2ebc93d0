use serde::{Deserialize, Serialize};

/// Settings of the hello demo, overridable through `HELLO_*` environment variables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelloConfig {
    pub host: String,
    pub port: u16,
    /// Default log filter, `RUST_LOG` takes precedence
    pub log_level: String,
}

impl Default for HelloConfig {
    fn default() -> Self {
        HelloConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_level: "info".to_string(),
        }
    }
}

impl HelloConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
