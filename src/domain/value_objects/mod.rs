//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod cache_directive;
mod content_type;
mod hash;
mod theme_id;

pub use cache_directive::CacheDirective;
pub use content_type::ContentType;
pub use hash::ContentHash;
pub use theme_id::ThemeId;
