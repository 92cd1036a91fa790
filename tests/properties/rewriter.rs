//! Property tests for HTML asset reference rewriting.

use proptest::prelude::*;

use swatch::domain::services::{rewrite, rewrite_with_references};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9_-]{1,8}").unwrap()
}

/// Relative reference like `../a/b.css` or `./x.js`
fn relative_reference(extension: &'static str) -> impl Strategy<Value = String> {
    (
        prop_oneof![Just(""), Just("./"), Just("../"), Just("../../")],
        proptest::collection::vec(segment(), 1..=3),
    )
        .prop_map(move |(prefix, segments)| format!("{prefix}{}{extension}", segments.join("/")))
}

fn external_reference(extension: &'static str) -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("https://cdn.example.com/"), Just("http://cdn.example.com/"), Just("//cdn.example.com/"), Just("/")],
        segment(),
    )
        .prop_map(move |(prefix, name)| format!("{prefix}{name}{extension}"))
}

fn asset_tag() -> impl Strategy<Value = String> {
    prop_oneof![
        relative_reference(".css").prop_map(|r| format!(r#"<link rel="stylesheet" href="{r}">"#)),
        relative_reference(".js").prop_map(|r| format!(r#"<script src="{r}"></script>"#)),
        external_reference(".css").prop_map(|r| format!(r#"<link href="{r}">"#)),
        external_reference(".js").prop_map(|r| format!(r#"<script src="{r}"></script>"#)),
        segment().prop_map(|s| format!(r#"<img src="{s}.png">"#)),
        segment().prop_map(|s| format!("<p>{s}</p>")),
    ]
}

fn document() -> impl Strategy<Value = (bool, Vec<String>)> {
    (any::<bool>(), proptest::collection::vec(asset_tag(), 0..=8))
}

fn render((with_head, tags): &(bool, Vec<String>)) -> String {
    let body = tags.concat();
    if *with_head {
        format!("<html><head><title>t</title></head><body>{body}</body></html>")
    } else {
        format!("<body>{body}</body>")
    }
}

fn current_file() -> impl Strategy<Value = String> {
    (proptest::collection::vec(segment(), 0..=3), segment())
        .prop_map(|(dir, name)| {
            let mut parts = dir;
            parts.push(format!("{name}.html"));
            parts.join("/")
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Rewriting an already rewritten document changes nothing.
    #[test]
    fn property_rewrite_is_idempotent(doc in document(), current in current_file()) {
        let once = rewrite(&render(&doc), "THEME-001", &current);
        let twice = rewrite(&once, "THEME-001", &current);
        prop_assert_eq!(twice, once);
    }

    /// PROPERTY: Absolute and external references survive untouched.
    #[test]
    fn property_external_references_untouched(
        reference in external_reference(".css"),
        current in current_file(),
    ) {
        let html = format!(r#"<link href="{reference}">"#);
        let outcome = rewrite_with_references(&html, "T", &current);

        prop_assert_eq!(outcome.html, html);
        prop_assert!(outcome.references.is_empty());
        prop_assert!(!outcome.base_injected);
    }

    /// PROPERTY: Every rewritten reference points into the theme's files API.
    #[test]
    fn property_rewritten_references_target_api(doc in document(), current in current_file()) {
        let outcome = rewrite_with_references(&render(&doc), "T", &current);

        for reference in &outcome.references {
            let url = format!("/api/themes/T/files/{}", reference.resolved);
            prop_assert!(outcome.html.contains(&url), "missing {} in {}", url, outcome.html);
            prop_assert!(!reference.resolved.split('/').any(|s| s == ".."));
        }
    }

    /// PROPERTY: A `<base>` is injected exactly when the document has a `<head>`.
    #[test]
    fn property_base_injected_iff_head(doc in document(), current in current_file()) {
        let outcome = rewrite_with_references(&render(&doc), "T", &current);

        prop_assert_eq!(outcome.base_injected, doc.0);
        prop_assert_eq!(outcome.html.matches("<base ").count(), usize::from(doc.0));
    }

    /// PROPERTY: Markup without link/script/head tags passes through unchanged.
    #[test]
    fn property_unrelated_markup_is_verbatim(text in "[a-z <>=\"'/]{0,80}") {
        let has_candidate = ["<link", "<script", "<head", "<base"]
            .iter()
            .any(|tag| text.contains(tag));
        prop_assume!(!has_candidate);

        prop_assert_eq!(rewrite(&text, "T", "a/b.html"), text);
    }

    /// PROPERTY: The rewriter never panics on arbitrary input.
    #[test]
    fn property_rewrite_never_panics(html in "(?s).{0,256}", current in "(?s).{0,32}") {
        let _ = rewrite(&html, "T", &current);
    }
}
