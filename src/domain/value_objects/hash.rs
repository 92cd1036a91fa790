//! Content Hash Value Object
//!
//! SHA-256 digest of a delivered body. Backs the strong `ETag` sent with
//! every response so clients can revalidate without refetching.

use std::fmt;

use sha2::{Digest, Sha256};

/// Content hash value object
///
/// Holds the lowercase hex digest, without prefix or quotes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    /// Compute the SHA-256 of `content`
    pub fn from_content(content: impl AsRef<[u8]>) -> Self {
        let digest = Sha256::digest(content.as_ref());
        Self(format!("{:x}", digest))
    }

    /// Hex digest
    pub fn hex(&self) -> &str {
        &self.0
    }

    /// Strong entity tag (`"<hex>"`, quotes included)
    pub fn etag(&self) -> String {
        format!("\"{}\"", self.0)
    }

    /// Check an `If-None-Match` header value against this hash.
    ///
    /// Accepts `*`, comma-separated lists and weak validators (`W/"…"`).
    pub fn matches_if_none_match(&self, header: &str) -> bool {
        header.split(',').map(str::trim).any(|candidate| {
            if candidate == "*" {
                return true;
            }
            let candidate = candidate.strip_prefix("W/").unwrap_or(candidate);
            candidate.trim_matches('"') == self.0
        })
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sha256:{}", self.0)
    }
}
