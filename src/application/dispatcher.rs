//! Content Dispatcher
//!
//! Turns a `(theme id, path)` request into a response body plus metadata.
//!
//! - **Raw** mode returns stored content unchanged. The content type comes
//!   from the path extension only, never from stored type metadata.
//! - **Preview** mode rewrites HTML so its relative asset references load
//!   through the API. Non-HTML files are returned verbatim as `text/plain`.
//!
//! The store lookup is the only I/O; rewriting runs after it completes, and
//! nothing is emitted until the whole body is ready.

use std::sync::Arc;

use crate::domain::entities::{FileSummary, VirtualFile};
use crate::domain::ports::{StoreError, ThemeStore};
use crate::domain::services::{rewrite_with_references, ResolvedReference};
use crate::domain::value_objects::{CacheDirective, ContentHash, ContentType, ThemeId};

/// Serving mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    Raw,
    Preview,
}

impl DeliveryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryMode::Raw => "raw",
            DeliveryMode::Preview => "preview",
        }
    }
}

/// A fully prepared response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub body: String,
    pub content_type: ContentType,
    pub cache: CacheDirective,
    pub etag: ContentHash,
    /// References rewritten in preview mode (empty otherwise)
    pub references: Vec<ResolvedReference>,
}

impl Delivery {
    fn new(body: String, content_type: ContentType, cache: CacheDirective) -> Self {
        let etag = ContentHash::from_content(&body);
        Self {
            body,
            content_type,
            cache,
            etag,
            references: Vec::new(),
        }
    }
}

/// Dispatch failures
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// No file stored under `(theme id, path)`
    #[error("file not found: {theme_id}/{path}")]
    NotFound { theme_id: ThemeId, path: String },

    /// Theme has no files at all
    #[error("theme not found: {theme_id}")]
    ThemeNotFound { theme_id: ThemeId },

    /// Store lookup failed
    #[error("theme store lookup failed: {0}")]
    StoreUnavailable(#[from] StoreError),
}

impl DispatchError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DispatchError::NotFound { .. } | DispatchError::ThemeNotFound { .. }
        )
    }
}

/// Serves theme files from an injected store.
#[derive(Clone)]
pub struct ContentDispatcher {
    store: Arc<dyn ThemeStore>,
    cache: CacheDirective,
}

impl ContentDispatcher {
    pub fn new(store: Arc<dyn ThemeStore>) -> Self {
        Self {
            store,
            cache: CacheDirective::default(),
        }
    }

    pub fn with_cache(mut self, cache: CacheDirective) -> Self {
        self.cache = cache;
        self
    }

    pub fn cache(&self) -> CacheDirective {
        self.cache
    }

    /// Serve a file in the given mode.
    pub fn dispatch(
        &self,
        mode: DeliveryMode,
        theme_id: &ThemeId,
        path: &str,
    ) -> Result<Delivery, DispatchError> {
        match mode {
            DeliveryMode::Raw => self.get_raw(theme_id, path),
            DeliveryMode::Preview => self.get_preview(theme_id, path),
        }
    }

    /// Stored content as-is, typed by path extension.
    pub fn get_raw(&self, theme_id: &ThemeId, path: &str) -> Result<Delivery, DispatchError> {
        let file = self.lookup(theme_id, path)?;
        let content_type = ContentType::from_path(path);

        tracing::debug!(theme = %theme_id, path, content_type = %content_type, "raw delivery");

        Ok(Delivery::new(
            file.content().to_string(),
            content_type,
            self.cache,
        ))
    }

    /// HTML rewritten for in-API rendering; anything else as plain text.
    pub fn get_preview(&self, theme_id: &ThemeId, path: &str) -> Result<Delivery, DispatchError> {
        let file = self.lookup(theme_id, path)?;

        if !file.is_html() {
            tracing::debug!(theme = %theme_id, path, file_type = %file.file_type(), "preview of non-html file");
            return Ok(Delivery::new(
                file.content().to_string(),
                ContentType::PlainText,
                self.cache,
            ));
        }

        let outcome = rewrite_with_references(file.content(), theme_id.as_str(), path);
        for reference in &outcome.references {
            tracing::debug!(
                theme = %theme_id,
                path,
                original = %reference.original,
                resolved = %reference.resolved,
                "rewrote asset reference"
            );
        }
        if !outcome.base_injected {
            tracing::trace!(theme = %theme_id, path, "no <base> injected");
        }

        let mut delivery = Delivery::new(outcome.html, ContentType::Html, self.cache);
        delivery.references = outcome.references;
        Ok(delivery)
    }

    /// A theme's files, sorted by path.
    pub fn list_files(&self, theme_id: &ThemeId) -> Result<Vec<FileSummary>, DispatchError> {
        let mut files = self.store.list_files(theme_id).map_err(|e| {
            tracing::error!(theme = %theme_id, error = %e, "theme listing failed");
            DispatchError::from(e)
        })?;

        if files.is_empty() {
            return Err(DispatchError::ThemeNotFound {
                theme_id: theme_id.clone(),
            });
        }

        files.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(files)
    }

    /// All themes known to the store.
    pub fn theme_ids(&self) -> Result<Vec<ThemeId>, DispatchError> {
        Ok(self.store.theme_ids()?)
    }

    fn lookup(&self, theme_id: &ThemeId, path: &str) -> Result<VirtualFile, DispatchError> {
        match self.store.get_file(theme_id, path) {
            Ok(Some(file)) => Ok(file),
            Ok(None) => Err(DispatchError::NotFound {
                theme_id: theme_id.clone(),
                path: path.to_string(),
            }),
            Err(e) => {
                tracing::error!(theme = %theme_id, path, error = %e, "theme store lookup failed");
                Err(e.into())
            }
        }
    }
}

impl std::fmt::Debug for ContentDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentDispatcher")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
