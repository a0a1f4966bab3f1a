//! Service configuration
//!
//! Layers, lowest precedence first:
//! - built-in defaults
//! - optional TOML file
//! - environment: `DATABASE_URL`, `ITEMSVC_BIND`, `ITEMSVC_MAX_CONNECTIONS`
//!
//! CLI flags are applied on top by the binary.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Default pool size
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Complete service configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    /// Address the HTTP server binds to
    pub bind_addr: SocketAddr,

    /// PostgreSQL connection string
    pub database_url: String,

    /// Upper bound on pooled connections
    pub max_connections: u32,

    /// Allow any CORS origin instead of localhost only
    pub cors_permissive: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            database_url: "postgres://localhost/items".to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            cors_permissive: false,
        }
    }
}

impl ServiceConfig {
    /// Load defaults, then the optional file, then the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply environment overrides through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL") {
            self.database_url = url;
        }

        if let Some(bind) = lookup("ITEMSVC_BIND") {
            self.bind_addr = bind.parse().map_err(|e| ConfigError::Invalid {
                key: "ITEMSVC_BIND",
                reason: format!("{e}"),
            })?;
        }

        if let Some(max) = lookup("ITEMSVC_MAX_CONNECTIONS") {
            self.max_connections = max.parse().map_err(|e| ConfigError::Invalid {
                key: "ITEMSVC_MAX_CONNECTIONS",
                reason: format!("{e}"),
            })?;
        }

        Ok(())
    }

    /// Reject values the pool or listener cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "max_connections",
                reason: "must be at least 1".to_string(),
            });
        }

        if self.database_url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "database_url",
                reason: "cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}
