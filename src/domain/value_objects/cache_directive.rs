//! Cache Directive value object

use std::fmt;

/// `Cache-Control` policy attached to every delivery.
///
/// Stored files never change after seeding, so responses may be kept by any
/// cache for the configured lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheDirective {
    max_age_secs: u64,
}

impl CacheDirective {
    /// One hour
    pub const DEFAULT_MAX_AGE_SECS: u64 = 3600;

    pub const fn public(max_age_secs: u64) -> Self {
        Self { max_age_secs }
    }

    pub fn max_age_secs(&self) -> u64 {
        self.max_age_secs
    }

    pub fn header_value(&self) -> String {
        format!("public, max-age={}", self.max_age_secs)
    }
}

impl Default for CacheDirective {
    fn default() -> Self {
        Self::public(Self::DEFAULT_MAX_AGE_SECS)
    }
}

impl fmt::Display for CacheDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header_value())
    }
}
