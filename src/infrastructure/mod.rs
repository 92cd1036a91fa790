//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - Theme store implementations (memory, JSON snapshot)

pub mod repositories;

// Re-export for convenience
pub use repositories::{MemoryThemeStore, SnapshotThemeStore};
