//! Configuration module for Swatch
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SWATCH_*)
//! 3. Project config (./swatch.toml)
//! 4. User config (<config dir>/swatch/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{with_overrides_from, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{CacheConfig, Config, LogFormat, LoggingConfig, ServerConfig, StoreConfig};
