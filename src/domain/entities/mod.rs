//! Domain Entities
//!
//! - `VirtualFile` - A stored theme file, identified by `(theme id, path)`
//! - `FileSummary` - Listing view of a `VirtualFile`

mod virtual_file;

pub use virtual_file::{FileSummary, FileType, VirtualFile};
