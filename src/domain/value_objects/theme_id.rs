//! ThemeId value object

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a theme (e.g. `THEME-001`).
///
/// Opaque to the core: it is only compared, hashed and echoed into URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeId(String);

impl ThemeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ThemeId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ThemeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for ThemeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
