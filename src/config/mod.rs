//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/georadius/config.toml

pub mod defaults;

use crate::error::{Error, Result};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Ingestion settings
    #[serde(default)]
    pub ingest: IngestConfig,

    /// Point store settings
    #[serde(default)]
    pub store: StoreConfig,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Ingestion settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Directory holding dataset files, one `<DATASET>.txt` per entry in `datasets`
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Dataset files imported at startup (country codes)
    #[serde(default = "default_datasets")]
    pub datasets: Vec<String>,

    /// Abort an import on the first malformed line instead of skipping it
    #[serde(default)]
    pub strict: bool,
}

/// Point store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store backend name
    #[serde(default = "default_store_backend")]
    pub backend: String,
}

// Default value functions for serde
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}
fn default_datasets() -> Vec<String> {
    DEFAULT_DATASETS.iter().map(|s| s.to_string()).collect()
}
fn default_store_backend() -> String {
    DEFAULT_STORE_BACKEND.to_string()
}

// Implement Default traits
impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            ingest: IngestConfig::default(),
            store: StoreConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            datasets: default_datasets(),
            strict: false,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: default_store_backend(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| {
                Error::Config(format!("Failed to read config file: {}", e))
            })?;

            toml::from_str(&content).map_err(|e| {
                Error::Config(format!("Failed to parse config file: {}", e))
            })
        } else {
            // Create default config
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            Error::Config(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(&path, content).map_err(|e| {
            Error::Config(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["server", "host"] => Some(self.server.host.clone()),
            ["server", "port"] => Some(self.server.port.to_string()),

            ["ingest", "data_dir"] => Some(self.ingest.data_dir.display().to_string()),
            ["ingest", "datasets"] => Some(self.ingest.datasets.join(",")),
            ["ingest", "strict"] => Some(self.ingest.strict.to_string()),

            ["store", "backend"] => Some(self.store.backend.clone()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["server", "host"] => {
                self.server.host = value.to_string();
            }
            ["server", "port"] => {
                self.server.port = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid port value: {}", value))
                })?;
            }

            ["ingest", "data_dir"] => {
                self.ingest.data_dir = PathBuf::from(value);
            }
            ["ingest", "datasets"] => {
                self.ingest.datasets = value
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
            }
            ["ingest", "strict"] => {
                self.ingest.strict = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid boolean value: {}", value))
                })?;
            }

            ["store", "backend"] => {
                self.store.backend = value.to_string();
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "server.host",
            "server.port",
            "ingest.data_dir",
            "ingest.datasets",
            "ingest.strict",
            "store.backend",
        ]
    }

    /// Path of the dataset file for one dataset code
    pub fn dataset_path(&self, dataset: &str) -> PathBuf {
        self.ingest.data_dir.join(format!("{}.txt", dataset))
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.ingest.datasets, vec!["US".to_string()]);
        assert!(!config.ingest.strict);
        assert_eq!(config.store.backend, "memory");
    }

    #[test]
    fn test_get_set() {
        let mut config = Config::default();

        assert_eq!(config.get("store.backend"), Some("memory".to_string()));

        config.set("server.port", "9090").unwrap();
        assert_eq!(config.get("server.port"), Some("9090".to_string()));
        assert_eq!(config.server.port, 9090);

        config.set("ingest.datasets", "US, CA").unwrap();
        assert_eq!(
            config.ingest.datasets,
            vec!["US".to_string(), "CA".to_string()]
        );
    }

    #[test]
    fn test_get_invalid_key() {
        let config = Config::default();
        assert_eq!(config.get("invalid.key"), None);
    }

    #[test]
    fn test_set_invalid_key() {
        let mut config = Config::default();
        assert!(config.set("invalid.key", "value").is_err());
    }

    #[test]
    fn test_set_invalid_value() {
        let mut config = Config::default();
        assert!(config.set("server.port", "not_a_number").is_err());
        assert!(config.set("ingest.strict", "maybe").is_err());
    }

    #[test]
    fn test_config_roundtrip() {
        // A default config survives serialize/deserialize intact
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let loaded: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(loaded.server.port, 8080);
        assert_eq!(loaded.ingest.datasets, vec!["US".to_string()]);
        assert_eq!(loaded.store.backend, "memory");
    }

    #[test]
    fn test_serialization_format() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();

        assert!(toml.contains("[server]"));
        assert!(toml.contains("[ingest]"));
        assert!(toml.contains("[store]"));
    }

    #[test]
    fn test_dataset_path() {
        let mut config = Config::default();
        config.ingest.data_dir = PathBuf::from("/var/lib/georadius");
        assert_eq!(
            config.dataset_path("US"),
            PathBuf::from("/var/lib/georadius/US.txt")
        );
    }

    #[test]
    fn test_server_addr() {
        let config = Config::default();
        assert_eq!(config.server_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_available_keys() {
        let keys = Config::available_keys();
        assert!(keys.contains(&"server.port"));
        assert!(keys.contains(&"ingest.data_dir"));
        assert!(keys.contains(&"store.backend"));
    }
}
