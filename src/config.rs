//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use std::env;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Record store configuration
    pub store: StoreConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// Record store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path of the JSON file backing the agent collection
    pub data_file: PathBuf,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            store: StoreConfig {
                // Default matches the demo data file shipped next to the
                // process working directory
                data_file: env::var_os("AGENT_DATA_FILE")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("agent-data.json")),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_addr_format() {
        let config = Config {
            server: ServerConfig {
                port: 9000,
                host: "127.0.0.1".to_string(),
            },
            store: StoreConfig {
                data_file: PathBuf::from("agent-data.json"),
            },
        };
        assert_eq!(config.server_addr(), "127.0.0.1:9000");
    }
}
