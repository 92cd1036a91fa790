//! In-memory Theme Store
//!
//! Holds every file in a nested ordered map. Built once, then only read, so
//! it can be shared behind an `Arc` without any locking.

use std::collections::BTreeMap;

use crate::domain::entities::{FileSummary, VirtualFile};
use crate::domain::ports::{StoreResult, ThemeStore};
use crate::domain::value_objects::ThemeId;

/// Theme store backed by process memory
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    themes: BTreeMap<ThemeId, BTreeMap<String, VirtualFile>>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, replacing any file with the same `(theme id, path)`.
    ///
    /// Returns the replaced file, if any.
    pub fn insert(&mut self, file: VirtualFile) -> Option<VirtualFile> {
        self.themes
            .entry(file.theme_id().clone())
            .or_default()
            .insert(file.path().to_string(), file)
    }

    /// Total number of files across all themes
    pub fn len(&self) -> usize {
        self.themes.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

impl FromIterator<VirtualFile> for MemoryThemeStore {
    fn from_iter<I: IntoIterator<Item = VirtualFile>>(iter: I) -> Self {
        let mut store = Self::new();
        for file in iter {
            store.insert(file);
        }
        store
    }
}

impl ThemeStore for MemoryThemeStore {
    fn get_file(&self, theme_id: &ThemeId, path: &str) -> StoreResult<Option<VirtualFile>> {
        Ok(self
            .themes
            .get(theme_id)
            .and_then(|files| files.get(path))
            .cloned())
    }

    fn list_files(&self, theme_id: &ThemeId) -> StoreResult<Vec<FileSummary>> {
        Ok(self
            .themes
            .get(theme_id)
            .map(|files| files.values().map(VirtualFile::summary).collect())
            .unwrap_or_default())
    }

    fn theme_ids(&self) -> StoreResult<Vec<ThemeId>> {
        Ok(self.themes.keys().cloned().collect())
    }
}
