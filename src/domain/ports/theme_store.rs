//! ThemeStore port - read access to stored theme files
//!
//! The store is a flat `(theme id, path)` keyed collection. It is read-only
//! from the core's perspective and must tolerate unbounded concurrent reads.

use crate::domain::entities::{FileSummary, VirtualFile};
use crate::domain::value_objects::ThemeId;

/// Result type for store lookups
pub type StoreResult<T> = Result<T, StoreError>;

/// Store failures.
///
/// A missing file is not an error: lookups return `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Backend could not be reached or answered with an error
    #[error("theme store unavailable: {message}")]
    Unavailable { message: String },
}

impl StoreError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        StoreError::Unavailable {
            message: message.into(),
        }
    }
}

/// Abstract read-only theme store
///
/// Implemented by the infrastructure layer and injected into the
/// dispatcher at startup.
pub trait ThemeStore: Send + Sync {
    /// Look up one file
    fn get_file(&self, theme_id: &ThemeId, path: &str) -> StoreResult<Option<VirtualFile>>;

    /// List a theme's files (empty when the theme is unknown)
    fn list_files(&self, theme_id: &ThemeId) -> StoreResult<Vec<FileSummary>>;

    /// All theme ids with at least one file
    fn theme_ids(&self) -> StoreResult<Vec<ThemeId>>;
}
