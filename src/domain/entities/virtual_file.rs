//! VirtualFile entity - one stored file of a theme
//!
//! Theme files are addressed by `(theme id, virtual path)` and never change
//! after seeding. Paths are opaque `/`-separated keys without a leading `/`;
//! they are never resolved against a real directory tree.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ThemeId;

/// Stored type metadata of a theme file.
///
/// Only preview delivery consults it; raw delivery derives the content type
/// from the path extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum FileType {
    Html,
    Css,
    Js,
    Md,
    #[default]
    Plain,
}

impl FileType {
    /// Parse a stored type label. Unknown labels become [`FileType::Plain`].
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "html" | "htm" => FileType::Html,
            "css" => FileType::Css,
            "js" | "javascript" => FileType::Js,
            "md" | "markdown" => FileType::Md,
            _ => FileType::Plain,
        }
    }

    /// Guess a type from a path extension (used when a snapshot omits it).
    pub fn from_path(path: &str) -> Self {
        let file_name = path.rsplit('/').next().unwrap_or(path);
        match file_name.rsplit_once('.') {
            Some((_, extension)) => Self::parse(extension),
            None => FileType::Plain,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Html => "html",
            FileType::Css => "css",
            FileType::Js => "js",
            FileType::Md => "md",
            FileType::Plain => "plain",
        }
    }
}

impl From<String> for FileType {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored theme file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualFile {
    theme_id: ThemeId,
    path: String,
    file_type: FileType,
    content: String,
    created_at: DateTime<Utc>,
}

impl VirtualFile {
    /// Create a new file stamped with the current time.
    pub fn new(
        theme_id: impl Into<ThemeId>,
        path: impl Into<String>,
        file_type: FileType,
        content: impl Into<String>,
    ) -> Self {
        Self {
            theme_id: theme_id.into(),
            path: path.into(),
            file_type,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn theme_id(&self) -> &ThemeId {
        &self.theme_id
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_html(&self) -> bool {
        self.file_type == FileType::Html
    }

    /// Size of the content in bytes (UTF-8)
    pub fn size_bytes(&self) -> u64 {
        self.content.len() as u64
    }

    /// Listing view of this file
    pub fn summary(&self) -> FileSummary {
        FileSummary {
            path: self.path.clone(),
            file_type: self.file_type,
            size_bytes: self.size_bytes(),
            created_at: self.created_at,
        }
    }
}

/// Metadata shown in a theme's file listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSummary {
    pub path: String,
    #[serde(rename = "type")]
    pub file_type: FileType,
    pub size_bytes: u64,
    pub created_at: DateTime<Utc>,
}
