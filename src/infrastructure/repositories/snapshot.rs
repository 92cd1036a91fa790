//! JSON Snapshot Theme Store
//!
//! Loads an exported set of themes from a JSON file once at startup and serves
//! it from memory.
//!
//! ```json
//! {
//!   "themes": [
//!     {
//!       "id": "THEME-001",
//!       "files": [
//!         { "path": "mockups/index.html", "type": "html", "content": "<html>…" },
//!         { "path": "mockups/styles.css", "content": "body {}" }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! `type` falls back to the path extension and `createdAt` to the snapshot
//! file's modification time when omitted.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::MemoryThemeStore;
use crate::domain::entities::{FileSummary, FileType, VirtualFile};
use crate::domain::ports::{StoreError, StoreResult, ThemeStore};
use crate::domain::value_objects::ThemeId;

#[derive(Debug, Deserialize)]
struct SnapshotFile {
    #[serde(default)]
    themes: Vec<SnapshotTheme>,
}

#[derive(Debug, Deserialize)]
struct SnapshotTheme {
    id: ThemeId,
    #[serde(default)]
    files: Vec<SnapshotEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotEntry {
    path: String,
    #[serde(rename = "type", default)]
    file_type: Option<FileType>,
    content: String,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

/// Theme store loaded from a JSON snapshot file
#[derive(Debug, Clone)]
pub struct SnapshotThemeStore {
    path: PathBuf,
    files: MemoryThemeStore,
}

impl SnapshotThemeStore {
    /// Read and decode the snapshot at `path`.
    ///
    /// An unreadable or malformed snapshot makes the store unavailable.
    pub fn load(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let content = fs::read_to_string(&path).map_err(|e| {
            StoreError::unavailable(format!("cannot read snapshot {}: {}", path.display(), e))
        })?;

        let loaded_at = fs::metadata(&path)
            .and_then(|m| m.modified())
            .map(DateTime::<Utc>::from)
            .unwrap_or_else(|_| Utc::now());

        let files = Self::parse(&content, loaded_at).map_err(|e| {
            StoreError::unavailable(format!("invalid snapshot {}: {}", path.display(), e))
        })?;

        tracing::info!(
            snapshot = %path.display(),
            files = files.len(),
            "loaded theme snapshot"
        );

        Ok(Self { path, files })
    }

    /// Decode snapshot JSON into an in-memory store.
    pub fn parse(content: &str, default_created_at: DateTime<Utc>) -> serde_json::Result<MemoryThemeStore> {
        let snapshot: SnapshotFile = serde_json::from_str(content)?;
        let mut store = MemoryThemeStore::new();

        for theme in snapshot.themes {
            for entry in theme.files {
                let path = entry.path.trim_start_matches('/');
                if path.is_empty() {
                    tracing::warn!(theme = %theme.id, "skipping snapshot entry with empty path");
                    continue;
                }

                let file_type = entry.file_type.unwrap_or_else(|| FileType::from_path(path));
                let file = VirtualFile::new(theme.id.clone(), path, file_type, entry.content)
                    .with_created_at(entry.created_at.unwrap_or(default_created_at));

                if store.insert(file).is_some() {
                    tracing::warn!(theme = %theme.id, path, "duplicate snapshot entry, keeping the last one");
                }
            }
        }

        Ok(store)
    }

    /// Snapshot file this store was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl ThemeStore for SnapshotThemeStore {
    fn get_file(&self, theme_id: &ThemeId, path: &str) -> StoreResult<Option<VirtualFile>> {
        self.files.get_file(theme_id, path)
    }

    fn list_files(&self, theme_id: &ThemeId) -> StoreResult<Vec<FileSummary>> {
        self.files.list_files(theme_id)
    }

    fn theme_ids(&self) -> StoreResult<Vec<ThemeId>> {
        self.files.theme_ids()
    }
}
