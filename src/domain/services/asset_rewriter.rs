//! Asset Reference Rewriter
//!
//! Makes an HTML document served through the API render as if it were read
//! from a directory tree. Relative stylesheet and script references are
//! resolved against the document's virtual path and replaced with API URLs.
//!
//! ## Passes
//!
//! The rewrite runs three ordered passes, each a single left-to-right scan
//! over the output of the previous one:
//!
//! 1. `<link … href="X.css">`: relative stylesheet references
//! 2. `<script … src="X.js">`: relative script references
//! 3. `<base href>` injection right after `<head>` when the document has none,
//!    so everything the first two passes leave alone (images, fonts, anchors)
//!    still resolves through ordinary base-URL semantics
//!
//! Anything that does not structurally match is copied through untouched.
//! There is no error path.

use super::path_resolver::{directory_of, is_external_or_absolute, resolve};

/// Mount point of the HTTP API.
pub const API_PREFIX: &str = "/api";

/// API URL serving the raw content of `path` within `theme_id`.
///
/// An empty `path` yields the theme's files root (with trailing slash).
pub fn files_url(theme_id: &str, path: &str) -> String {
    format!("{API_PREFIX}/themes/{theme_id}/files/{path}")
}

/// A reference rewritten by [`rewrite_with_references`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedReference {
    /// Attribute value as written in the document
    pub original: String,
    /// Virtual path the value resolved to
    pub resolved: String,
}

/// Result of a full rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    /// Rewritten document
    pub html: String,
    /// Every reference that was replaced, in document order per pass
    pub references: Vec<ResolvedReference>,
    /// Whether a `<base>` element was inserted
    pub base_injected: bool,
}

/// Tag shapes recognized by the rewriter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AssetTag {
    Stylesheet,
    Script,
}

impl AssetTag {
    fn tag_name(self) -> &'static str {
        match self {
            AssetTag::Stylesheet => "link",
            AssetTag::Script => "script",
        }
    }

    fn attribute(self) -> &'static str {
        match self {
            AssetTag::Stylesheet => "href",
            AssetTag::Script => "src",
        }
    }

    fn extension(self) -> &'static str {
        match self {
            AssetTag::Stylesheet => ".css",
            AssetTag::Script => ".js",
        }
    }
}

/// Byte span of an opening tag, `<` inclusive to `>` inclusive.
#[derive(Debug, Clone, Copy)]
struct TagSpan {
    start: usize,
    end: usize,
}

/// Rewrite `html`, served as `current_file` of `theme_id`.
pub fn rewrite(html: &str, theme_id: &str, current_file: &str) -> String {
    rewrite_with_references(html, theme_id, current_file).html
}

/// Rewrite `html` and report what was changed.
pub fn rewrite_with_references(html: &str, theme_id: &str, current_file: &str) -> RewriteOutcome {
    let mut references = Vec::new();

    let html = rewrite_pass(html, AssetTag::Stylesheet, theme_id, current_file, &mut references);
    let html = rewrite_pass(&html, AssetTag::Script, theme_id, current_file, &mut references);
    let (html, base_injected) = inject_base(html, theme_id, current_file);

    RewriteOutcome {
        html,
        references,
        base_injected,
    }
}

fn rewrite_pass(
    html: &str,
    kind: AssetTag,
    theme_id: &str,
    current_file: &str,
    references: &mut Vec<ResolvedReference>,
) -> String {
    let mut out = String::with_capacity(html.len());
    let mut copied = 0;
    let mut search_from = 0;

    while let Some(tag) = find_tag(html, search_from, kind.tag_name()) {
        search_from = tag.end;

        let Some((value_start, value_end)) =
            find_attribute(html, tag, kind.tag_name().len(), kind.attribute())
        else {
            continue;
        };

        let value = &html[value_start..value_end];
        if value.len() <= kind.extension().len()
            || !value.ends_with(kind.extension())
            || is_external_or_absolute(value)
        {
            continue;
        }

        let resolved = resolve(current_file, value);
        out.push_str(&html[copied..value_start]);
        out.push_str(&files_url(theme_id, &resolved));
        copied = value_end;

        references.push(ResolvedReference {
            original: value.to_string(),
            resolved,
        });
    }

    out.push_str(&html[copied..]);
    out
}

fn inject_base(html: String, theme_id: &str, current_file: &str) -> (String, bool) {
    if html.to_ascii_lowercase().contains("<base") {
        return (html, false);
    }

    let Some(head) = find_tag(&html, 0, "head") else {
        return (html, false);
    };

    let directory = directory_of(current_file);
    let href = if directory.is_empty() {
        files_url(theme_id, "")
    } else {
        format!("{}/", files_url(theme_id, &directory))
    };

    let mut out = String::with_capacity(html.len() + href.len() + 16);
    out.push_str(&html[..head.end]);
    out.push_str("<base href=\"");
    out.push_str(&href);
    out.push_str("\">");
    out.push_str(&html[head.end..]);
    (out, true)
}

/// Find the next opening tag named `name` (ASCII case-insensitive) at or after
/// `from`.
///
/// Returns `None` when no such tag exists or the tag is never closed.
fn find_tag(html: &str, from: usize, name: &str) -> Option<TagSpan> {
    let bytes = html.as_bytes();
    let mut i = from;

    while i < bytes.len() {
        let start = i + html[i..].find('<')?;
        let name_end = start + 1 + name.len();

        let name_matches = bytes
            .get(start + 1..name_end)
            .is_some_and(|candidate| candidate.eq_ignore_ascii_case(name.as_bytes()));
        let boundary = bytes
            .get(name_end)
            .is_some_and(|&b| b.is_ascii_whitespace() || b == b'>' || b == b'/');

        if name_matches && boundary {
            let end = find_tag_end(bytes, name_end)?;
            return Some(TagSpan { start, end });
        }

        i = start + 1;
    }

    None
}

/// Index just past the `>` closing a tag, honouring quoted attribute values.
///
/// A quote that is never closed (`title=Bob's`) is literal text; the tag then
/// ends at its first `>`.
fn find_tag_end(bytes: &[u8], from: usize) -> Option<usize> {
    let mut quote: Option<u8> = None;
    let mut first_close: Option<usize> = None;

    for (offset, &b) in bytes[from..].iter().enumerate() {
        if b == b'>' && first_close.is_none() {
            first_close = Some(from + offset + 1);
        }
        match (quote, b) {
            (Some(q), _) if b == q => quote = None,
            (Some(_), _) => {}
            (None, b'"' | b'\'') => quote = Some(b),
            (None, b'>') => return Some(from + offset + 1),
            (None, _) => {}
        }
    }

    first_close
}

/// Locate the quoted value of attribute `attr` inside `tag`.
///
/// Returns the absolute byte span of the value, excluding quotes. Unquoted
/// values are not considered a match.
fn find_attribute(html: &str, tag: TagSpan, name_len: usize, attr: &str) -> Option<(usize, usize)> {
    let bytes = html.as_bytes();
    // Skip `<` and the tag name; stop before the closing `>`.
    let end = tag.end - 1;
    let mut i = tag.start + 1 + name_len;

    while i < end {
        while i < end && (bytes[i].is_ascii_whitespace() || bytes[i] == b'/') {
            i += 1;
        }
        if i >= end {
            break;
        }

        let name_start = i;
        while i < end
            && !bytes[i].is_ascii_whitespace()
            && !matches!(bytes[i], b'=' | b'/' | b'>')
        {
            i += 1;
        }
        let attr_name = &bytes[name_start..i];

        while i < end && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= end || bytes[i] != b'=' {
            // Boolean attribute (`defer`, `async`), or a stray `=`-less token.
            if i == name_start {
                i += 1;
            }
            continue;
        }
        i += 1;
        while i < end && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= end {
            break;
        }

        match bytes[i] {
            q @ (b'"' | b'\'') => {
                let value_start = i + 1;
                let value_end = value_start + html[value_start..end].find(q as char)?;
                if attr_name.eq_ignore_ascii_case(attr.as_bytes()) {
                    return Some((value_start, value_end));
                }
                i = value_end + 1;
            }
            _ => {
                while i < end && !bytes[i].is_ascii_whitespace() {
                    i += 1;
                }
            }
        }
    }

    None
}
