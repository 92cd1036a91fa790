//! Virtual Path Resolver
//!
//! Resolves a relative reference (`./styles.css`, `../script.js`) against the
//! directory of a virtual file. Themes live in a flat `(theme, path)` store, so
//! directories only exist as `/`-separated prefixes of stored paths; this module
//! emulates `.` and `..` on top of that.
//!
//! ## Rules
//!
//! - The directory of `a/b/index.html` is `a/b`; the file name never takes part
//!   in resolution.
//! - `..` pops one directory. Once the root is reached, extra `..` segments are
//!   absorbed rather than rejected.
//! - `.` and empty segments are ignored.
//!
//! Absolute (`/x.css`) and external (`https://…`, `//cdn…`) references are the
//! caller's responsibility: filter them with [`is_external_or_absolute`] first.

/// Prefixes that mark a reference as absolute or external.
const PASS_THROUGH_PREFIXES: [&str; 4] = ["http://", "https://", "//", "/"];

/// Directory segments of a virtual file path (everything but the file name).
fn directory_segments(current_file: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = current_file.split('/').collect();
    segments.pop();
    segments.retain(|s| !s.is_empty());
    segments
}

/// Directory part of a virtual path (`"mockups/index.html"` → `"mockups"`).
///
/// Returns an empty string for files at the theme root.
pub fn directory_of(path: &str) -> String {
    directory_segments(path).join("/")
}

/// Returns true if the reference must not go through [`resolve`].
pub fn is_external_or_absolute(reference: &str) -> bool {
    PASS_THROUGH_PREFIXES
        .iter()
        .any(|prefix| reference.starts_with(prefix))
}

/// Resolve `reference` against the directory of `current_file`.
///
/// Never fails. The empty string denotes the theme root.
///
/// ```
/// use swatch::domain::services::path_resolver::resolve;
///
/// assert_eq!(resolve("mockups/index.html", "styles.css"), "mockups/styles.css");
/// assert_eq!(resolve("components/buttons.html", "../mockups/script.js"), "mockups/script.js");
/// assert_eq!(resolve("index.html", "../assets/x.css"), "assets/x.css");
/// ```
pub fn resolve(current_file: &str, reference: &str) -> String {
    let mut stack = directory_segments(current_file);
    let reference = reference.strip_prefix("./").unwrap_or(reference);

    for segment in reference.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            name => stack.push(name),
        }
    }

    stack.join("/")
}
