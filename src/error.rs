//! Error types for Swatch
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::StoreError;

/// Result type alias for Swatch operations
pub type SwatchResult<T> = Result<T, SwatchError>;

/// Errors raised while configuring and wiring the service
#[derive(Error, Debug)]
pub enum SwatchError {
    /// Config file is not valid TOML or has wrong value types
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Config file given explicitly does not exist
    #[error("config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Bind address could not be parsed
    #[error("invalid bind address '{value}': {message}")]
    InvalidBind { value: String, message: String },

    /// Theme store could not be constructed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
