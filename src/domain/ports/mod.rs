//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod theme_store;

pub use theme_store::{StoreError, StoreResult, ThemeStore};
