//! Configuration loading for the classification service.
//!
//! Supports a JSON configuration file for the listen address and the model
//! artifact path; `main` layers environment overrides on top.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fixed default name of the serialized classifier artifact.
pub const DEFAULT_MODEL_PATH: &str = "phishing_model.json";

/// Root configuration for the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name/identifier.
    #[serde(default = "default_service_name")]
    pub name: String,

    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Path to the serialized classifier artifact.
    #[serde(default = "default_model_path")]
    pub model_path: String,
}

fn default_service_name() -> String {
    "PhishGuard".to_string()
}

fn default_model_path() -> String {
    DEFAULT_MODEL_PATH.to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
            server: ServerConfig::default(),
            model_path: default_model_path(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone)]
pub enum ConfigError {
    Io { path: String, error: String },
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io { path, error } => {
                write!(f, "Failed to read config file '{}': {}", path, error)
            }
            ConfigError::Parse(e) => write!(f, "Failed to parse config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let config = ServiceConfig::from_json("{}").unwrap();
        assert_eq!(config.name, "PhishGuard");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.model_path, DEFAULT_MODEL_PATH);
    }

    #[test]
    fn parse_full_config() {
        let json = r#"{
            "name": "Test Service",
            "server": { "host": "127.0.0.1", "port": 9000 },
            "model_path": "/opt/models/phishing_model.json"
        }"#;

        let config = ServiceConfig::from_json(json).unwrap();
        assert_eq!(config.name, "Test Service");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.model_path, "/opt/models/phishing_model.json");
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        assert!(matches!(
            ServiceConfig::from_json("{ nope").unwrap_err(),
            ConfigError::Parse(_)
        ));
    }
}
