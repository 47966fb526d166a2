/// Server configuration
use crate::error::{Result, ServerError};
use folio_core::contact::{DEFAULT_INBOX_CAPACITY, DEFAULT_LATENCY};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_contact")]
    pub contact: ContactSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContactSettings {
    /// Delay of the simulated submission call
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,

    /// Submissions kept in memory before the oldest are dropped
    #[serde(default = "default_inbox_capacity")]
    pub inbox_capacity: usize,
}

impl ContactSettings {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl ServerConfig {
    /// Load configuration from file and environment.
    ///
    /// `path` overrides the default `config.toml` in the working directory.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        // Load from config file if it exists
        let config_path = path.map_or_else(|| PathBuf::from("config.toml"), Path::to_path_buf);
        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        } else if path.is_some() {
            return Err(ServerError::Config(format!(
                "Config file not found: {:?}",
                config_path
            )));
        }

        // Override with environment variables, e.g. FOLIO_CONTACT__LATENCY_MS
        settings = settings.add_source(
            config::Environment::with_prefix("FOLIO")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ServerError::Config("Port must be non-zero".to_string()));
        }

        if self.contact.inbox_capacity == 0 {
            return Err(ServerError::Config(
                "Inbox capacity must be at least 1 (set FOLIO_CONTACT__INBOX_CAPACITY)".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_contact() -> ContactSettings {
    ContactSettings {
        latency_ms: default_latency_ms(),
        inbox_capacity: default_inbox_capacity(),
    }
}

fn default_latency_ms() -> u64 {
    DEFAULT_LATENCY.as_millis() as u64
}

fn default_inbox_capacity() -> usize {
    DEFAULT_INBOX_CAPACITY
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            contact: default_contact(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.contact.latency(), Duration::from_millis(1000));
        assert_eq!(config.contact.inbox_capacity, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[server]\nport = 9090\n\n[contact]\nlatency_ms = 10").unwrap();

        let config = ServerConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.contact.latency_ms, 10);
        assert_eq!(config.contact.inbox_capacity, 100);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = ServerConfig::load(Some(Path::new("/nonexistent/folio.toml"))).unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_zero_capacity() {
        let mut config = ServerConfig::default();
        config.contact.inbox_capacity = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let mut config = ServerConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }
}
