//! Domain Layer
//!
//! The core of Swatch - pure preview logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Stored theme files (VirtualFile, FileSummary)
//! - `value_objects/` - Immutable value types (ThemeId, ContentType, ContentHash)
//! - `services/` - Path resolution and HTML asset rewriting
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All storage access goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
