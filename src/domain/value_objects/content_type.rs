//! Content Type value object
//!
//! Maps virtual paths to the media type used in HTTP responses. Raw delivery
//! derives the type from the file extension alone; stored type metadata never
//! takes part.

use std::fmt;

/// Media type of a delivered body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Html,
    Css,
    JavaScript,
    Markdown,
    PlainText,
}

impl ContentType {
    /// Derive the content type from the extension of a virtual path.
    ///
    /// Matching is case-insensitive; unknown or missing extensions map to
    /// [`ContentType::PlainText`].
    pub fn from_path(path: &str) -> Self {
        let file_name = path.rsplit('/').next().unwrap_or(path);
        let Some((_, extension)) = file_name.rsplit_once('.') else {
            return ContentType::PlainText;
        };

        match extension.to_ascii_lowercase().as_str() {
            "html" | "htm" => ContentType::Html,
            "css" => ContentType::Css,
            "js" => ContentType::JavaScript,
            "md" => ContentType::Markdown,
            _ => ContentType::PlainText,
        }
    }

    /// Bare media type (`text/css`)
    pub fn mime(&self) -> &'static str {
        match self {
            ContentType::Html => "text/html",
            ContentType::Css => "text/css",
            ContentType::JavaScript => "application/javascript",
            ContentType::Markdown => "text/markdown",
            ContentType::PlainText => "text/plain",
        }
    }

    /// `Content-Type` header value, with charset.
    pub fn header_value(&self) -> String {
        format!("{}; charset=utf-8", self.mime())
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}
