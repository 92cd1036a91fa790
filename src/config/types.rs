//! Configuration type definitions

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::CacheDirective;
use crate::error::{SwatchError, SwatchResult};

use super::loader::{self, ConfigWarning};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:3001".to_string()
}

/// Theme store configuration
///
/// Without a snapshot the server starts with an empty in-memory store.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreConfig {
    #[serde(default)]
    pub snapshot: Option<PathBuf>,
}

/// Response caching configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_max_age")]
    pub max_age_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_age_secs: default_max_age(),
        }
    }
}

fn default_max_age() -> u64 {
    CacheDirective::DEFAULT_MAX_AGE_SECS
}

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing-subscriber` filter directive (`info`, `swatch=debug`, ...)
    #[serde(default = "default_filter")]
    pub filter: String,

    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            format: LogFormat::default(),
        }
    }
}

fn default_filter() -> String {
    "info".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> SwatchResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> SwatchResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config (strict), user config, or defaults
    pub fn load_layered(project_root: &Path) -> SwatchResult<(Self, Vec<ConfigWarning>)> {
        loader::load_layered(project_root)
    }

    /// Load the user config, or defaults
    pub fn load_user_or_default() -> Self {
        loader::load_user_or_default()
    }

    /// Apply environment variable overrides (SWATCH_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Parsed listen address
    pub fn bind_addr(&self) -> SwatchResult<SocketAddr> {
        self.server
            .bind
            .parse()
            .map_err(|e: std::net::AddrParseError| SwatchError::InvalidBind {
                value: self.server.bind.clone(),
                message: e.to_string(),
            })
    }

    /// Cache directive attached to every delivery
    pub fn cache_directive(&self) -> CacheDirective {
        CacheDirective::public(self.cache.max_age_secs)
    }
}
