//! Server configuration
//!
//! Loaded from an optional `seikaku.toml`; every field has a default and CLI
//! flags override whatever the file provides.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "seikaku.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from an explicit path, or from the default file if
    /// one exists; otherwise fall back to defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::parse(&fs::read_to_string(path)?),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::parse(&fs::read_to_string(default_path)?)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::configuration(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = ServerConfig::parse("port = 8080\n").unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_malformed_file_is_a_configuration_error() {
        let err = ServerConfig::parse("port = \"yes\"\n").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }
}
