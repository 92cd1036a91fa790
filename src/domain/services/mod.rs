//! Domain Services
//!
//! Stateless, pure transformations over theme content.
//!
//! - `path_resolver` - `.`/`..` resolution over flat virtual paths
//! - `asset_rewriter` - rewrites HTML asset references to API URLs

pub mod asset_rewriter;
pub mod path_resolver;

pub use asset_rewriter::{
    files_url, rewrite, rewrite_with_references, ResolvedReference, RewriteOutcome, API_PREFIX,
};
pub use path_resolver::{directory_of, is_external_or_absolute, resolve};
