//! Repository Implementations
//!
//! Concrete implementations of the `ThemeStore` port.

mod memory;
mod snapshot;

pub use memory::MemoryThemeStore;
pub use snapshot::SnapshotThemeStore;
