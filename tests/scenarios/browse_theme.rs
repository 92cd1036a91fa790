//! Scenario: Browsing a Theme in the Preview Pane
//!
//! Journey: A designer opens several pages of a theme through the preview
//! API, and the browser follows every asset reference back into the API.
//!
//! Steps:
//! 1. Open a page next to its stylesheet
//! 2. Open a component page that borrows a sibling directory's script
//! 3. Open the root page that reaches above the theme root
//! 4. Open a page with no assets at all
//! 5. Fetch a stylesheet whose stored type is wrong
//! 6. Preview a Markdown note
//!
//! Success Criteria:
//! - Every rewritten URL fetches successfully
//! - Non-HTML files are never rewritten

use crate::common::*;

/// Open `page` in preview and follow each rewritten reference.
async fn open_and_follow(app: &TestApp, page: &str) -> TestResponse {
    let response = app
        .get(&format!("/api/themes/{THEME}/preview/{page}"))
        .await;
    assert_eq!(response.status, 200, "{page}");

    let prefix = format!("/api/themes/{THEME}/files/");
    for chunk in response.body.split('"').skip(1).step_by(2) {
        if chunk.starts_with(&prefix) && chunk.len() > prefix.len() && !chunk.ends_with('/') {
            let asset = app.get(chunk).await;
            assert_eq!(asset.status, 200, "{page} references {chunk}");
        }
    }
    response
}

/// SCENARIO: A page loads its sibling stylesheet.
#[tokio::test]
async fn scenario_sibling_stylesheet() {
    let app = TestApp::fixture();

    let page = open_and_follow(&app, "mockups/index.html").await;

    assert!(page
        .body
        .contains(r#"href="/api/themes/THEME-001/files/mockups/styles.css""#));
}

/// SCENARIO: A component page loads a script from a sibling directory.
#[tokio::test]
async fn scenario_parent_relative_script() {
    let app = TestApp::fixture();

    let page = open_and_follow(&app, "components/buttons.html").await;

    assert!(page
        .body
        .contains(r#"src="/api/themes/THEME-001/files/mockups/script.js""#));
    assert!(page
        .body
        .contains(r#"<base href="/api/themes/THEME-001/files/components/">"#));
}

/// SCENARIO: A root page reaching above the root is clamped to the root.
#[tokio::test]
async fn scenario_root_clamp() {
    let app = TestApp::fixture();

    let page = app.get("/api/themes/THEME-001/preview/index.html").await;

    assert_eq!(
        page.body,
        concat!(
            r#"<head><base href="/api/themes/THEME-001/files/">"#,
            r#"<link href="/api/themes/THEME-001/files/assets/x.css"></head>"#,
            r#"<body><a href="components/buttons.html">Buttons</a></body>"#
        )
    );
}

/// SCENARIO: A page without assets still gets a base for anything else it links.
#[tokio::test]
async fn scenario_base_injection_only() {
    let app = TestApp::fixture();

    let page = app
        .get("/api/themes/THEME-001/preview/wireframes/index.html")
        .await;

    assert_eq!(
        page.body,
        r#"<head><base href="/api/themes/THEME-001/files/wireframes/"><title>T</title></head>"#
    );
}

/// SCENARIO: The extension decides the raw type even when metadata disagrees.
#[tokio::test]
async fn scenario_extension_wins_in_raw_mode() {
    let app = TestApp::fixture();

    let asset = app.get("/api/themes/THEME-001/files/x.css").await;

    assert_eq!(asset.status, 200);
    assert_eq!(asset.header("content-type"), Some("text/css; charset=utf-8"));
}

/// SCENARIO: Previewing a non-HTML file shows it as plain text, untouched.
#[tokio::test]
async fn scenario_markdown_preview_is_plain_text() {
    let app = TestApp::fixture();

    let note = app.get("/api/themes/THEME-001/preview/notes.md").await;

    assert_eq!(note.status, 200);
    assert_eq!(note.header("content-type"), Some("text/plain; charset=utf-8"));
    assert_eq!(note.body, NOTES_MD);
}
