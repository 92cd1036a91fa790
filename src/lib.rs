//! Swatch - theme storage and preview server
//!
//! Swatch serves multi-file themes (HTML, CSS, JS, Markdown) from a flat
//! `(theme id, virtual path)` store through an HTTP API. In preview mode,
//! HTML documents get their relative stylesheet and script references
//! rewritten to API URLs so they render as if read from a directory tree.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{ContentDispatcher, Delivery, DeliveryMode, DispatchError};
pub use config::Config;
pub use domain::entities::{FileSummary, FileType, VirtualFile};
pub use domain::ports::{StoreError, ThemeStore};
pub use domain::services::{resolve, rewrite};
pub use domain::value_objects::{ContentType, ThemeId};
pub use error::{SwatchError, SwatchResult};
pub use infrastructure::{MemoryThemeStore, SnapshotThemeStore};
