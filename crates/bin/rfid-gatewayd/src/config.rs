//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `rfid-gateway.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables (including
//! those loaded from `.env`) take precedence over file values.

use std::fmt;

use serde::Deserialize;

use rfid_gateway_adapter_storage_postgres_sqlx::ConnectionConfig;
use rfid_gateway_adapter_storage_postgres_sqlx::pool::DEFAULT_PASSWORD;

const CONFIG_FILE: &str = "rfid-gateway.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// `PostgreSQL` connection configuration.
#[derive(Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database user.
    pub user: String,
    /// Server host.
    pub host: String,
    /// Database name.
    pub name: String,
    /// Password. The default is for local development only.
    pub password: String,
    /// Server port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
    /// Emit JSON lines instead of human-readable text.
    pub json: bool,
}

impl Config {
    /// Load configuration from `rfid-gateway.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file(CONFIG_FILE)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Apply overrides from `lookup`. Unparsable port values are ignored.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("DB_USER") {
            self.database.user = val;
        }
        if let Some(val) = lookup("DB_HOST") {
            self.database.host = val;
        }
        if let Some(val) = lookup("DB_NAME") {
            self.database.name = val;
        }
        if let Some(val) = lookup("DB_PASS") {
            self.database.password = val;
        }
        if let Some(port) = lookup("DB_PORT").and_then(|val| val.parse().ok()) {
            self.database.port = port;
        }
        if let Some(val) = lookup("BIND_HOST") {
            self.server.host = val;
        }
        if let Some(port) = lookup("PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("LOG_FORMAT") {
            self.logging.json = val.eq_ignore_ascii_case("json");
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.database.port == 0 {
            return Err(ConfigError::Validation(
                "database port must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the storage adapter's connection settings.
    #[must_use]
    pub fn connection_config(&self) -> ConnectionConfig {
        ConnectionConfig {
            user: self.database.user.clone(),
            host: self.database.host.clone(),
            database: self.database.name.clone(),
            password: self.database.password.clone(),
            port: self.database.port,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            user: "postgres".to_string(),
            host: "localhost".to_string(),
            name: "rfid_db".to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            port: 5432,
        }
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("user", &self.user)
            .field("host", &self.host)
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .field("port", &self.port)
            .finish()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "rfid_gatewayd=info,rfid_gateway=info,tower_http=debug".to_string(),
            json: false,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
