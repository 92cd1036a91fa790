//! HTTP surface contracts
//!
//! Status codes, headers and JSON error envelopes the API promises to
//! clients, exercised through the router without a socket.

use crate::common::*;

mod raw_delivery {
    use super::*;

    /// CONTRACT: Raw delivery returns stored bytes with an extension-derived type.
    #[tokio::test]
    async fn contract_raw_returns_content_unchanged() {
        let app = TestApp::fixture();

        let response = app.get("/api/themes/THEME-001/files/mockups/styles.css").await;

        assert_eq!(response.status, 200);
        assert_eq!(response.header("content-type"), Some("text/css; charset=utf-8"));
        assert_eq!(response.body, STYLES_CSS);
    }

    /// CONTRACT: Raw delivery never rewrites HTML.
    #[tokio::test]
    async fn contract_raw_html_is_not_rewritten() {
        let app = TestApp::fixture();

        let response = app.get("/api/themes/THEME-001/files/mockups/index.html").await;

        assert_eq!(response.status, 200);
        assert_eq!(response.header("content-type"), Some("text/html; charset=utf-8"));
        assert_eq!(response.body, MOCKUP_INDEX_HTML);
    }

    /// CONTRACT: JavaScript is served as application/javascript.
    #[tokio::test]
    async fn contract_raw_script_content_type() {
        let app = TestApp::fixture();

        let response = app.get("/api/themes/THEME-001/files/mockups/script.js").await;

        assert_eq!(
            response.header("content-type"),
            Some("application/javascript; charset=utf-8")
        );
    }

    /// CONTRACT: Every delivery is cacheable for one hour and carries an ETag.
    #[tokio::test]
    async fn contract_cache_headers_present() {
        let app = TestApp::fixture();

        for uri in [
            "/api/themes/THEME-001/files/x.css",
            "/api/themes/THEME-001/preview/mockups/index.html",
            "/api/themes/THEME-001/preview/notes.md",
        ] {
            let response = app.get(uri).await;
            assert_eq!(response.status, 200, "{uri}");
            assert_eq!(response.header("cache-control"), Some("public, max-age=3600"), "{uri}");

            let etag = response.header("etag").unwrap_or_else(|| panic!("no etag for {uri}"));
            assert!(etag.starts_with('"') && etag.ends_with('"'), "{uri}: {etag}");
        }
    }
}

mod preview_delivery {
    use super::*;

    /// CONTRACT: Preview rewrites relative stylesheet and script references.
    #[tokio::test]
    async fn contract_preview_rewrites_relative_assets() {
        let app = TestApp::fixture();

        let response = app
            .get("/api/themes/THEME-001/preview/components/buttons.html")
            .await;

        assert_eq!(response.status, 200);
        assert_eq!(response.header("content-type"), Some("text/html; charset=utf-8"));
        assert!(response
            .body
            .contains(r#"href="/api/themes/THEME-001/files/mockups/styles.css""#));
        assert!(response
            .body
            .contains(r#"src="/api/themes/THEME-001/files/mockups/script.js""#));
        assert!(!response.body.contains("../mockups"));
    }

    /// CONTRACT: Preview leaves external references and other assets alone.
    #[tokio::test]
    async fn contract_preview_keeps_external_and_unrelated_references() {
        let app = TestApp::fixture();

        let response = app.get("/api/themes/THEME-001/preview/mockups/index.html").await;

        assert!(response
            .body
            .contains(r#"href="https://fonts.example.com/inter.css""#));
        assert!(response.body.contains(r#"<img src="logo.png">"#));
        assert!(response
            .body
            .contains(r#"<head><base href="/api/themes/THEME-001/files/mockups/">"#));
    }
}

mod not_modified {
    use super::*;

    /// CONTRACT: A matching If-None-Match yields 304 with no body.
    #[tokio::test]
    async fn contract_matching_etag_is_not_modified() {
        let app = TestApp::fixture();
        let uri = "/api/themes/THEME-001/files/mockups/script.js";

        let first = app.get(uri).await;
        let etag = first.header("etag").unwrap().to_string();

        let second = app
            .get_with_headers(uri, &[("if-none-match", etag.as_str())])
            .await;

        assert_eq!(second.status, 304);
        assert!(second.body.is_empty());
        assert_eq!(second.header("etag"), Some(etag.as_str()));
    }

    /// CONTRACT: A stale ETag gets the full body.
    #[tokio::test]
    async fn contract_stale_etag_gets_body() {
        let app = TestApp::fixture();

        let response = app
            .get_with_headers(
                "/api/themes/THEME-001/files/mockups/script.js",
                &[("if-none-match", "\"0000\"")],
            )
            .await;

        assert_eq!(response.status, 200);
        assert_eq!(response.body, SCRIPT_JS);
    }

    /// CONTRACT: Raw and preview of the same HTML file carry different ETags.
    #[tokio::test]
    async fn contract_etag_tracks_delivered_body() {
        let app = TestApp::fixture();

        let raw = app.get("/api/themes/THEME-001/files/wireframes/index.html").await;
        let preview = app
            .get("/api/themes/THEME-001/preview/wireframes/index.html")
            .await;

        assert_ne!(raw.header("etag"), preview.header("etag"));
    }
}

mod errors {
    use super::*;

    /// CONTRACT: A missing file is a 404 JSON envelope in both modes.
    #[tokio::test]
    async fn contract_missing_file_is_404() {
        let app = TestApp::fixture();

        for uri in [
            "/api/themes/THEME-001/files/missing.css",
            "/api/themes/THEME-001/preview/missing.html",
            "/api/themes/THEME-999/files/mockups/styles.css",
        ] {
            let response = app.get(uri).await;
            assert_eq!(response.status, 404, "{uri}");
            assert_eq!(
                response.json(),
                serde_json::json!({ "success": false, "error": "File not found" }),
                "{uri}"
            );
        }
    }

    /// CONTRACT: Paths are exact keys; no normalization happens before lookup.
    #[tokio::test]
    async fn contract_paths_are_opaque_keys() {
        let app = TestApp::fixture();

        let response = app.get("/api/themes/THEME-001/files/MOCKUPS/styles.css").await;
        assert_eq!(response.status, 404);
    }

    /// CONTRACT: Store failures are a generic 500 that leaks no detail.
    #[tokio::test]
    async fn contract_store_failure_is_500() {
        let app = TestApp::new(BrokenStore);

        for uri in [
            "/api/themes/THEME-001/files/x.css",
            "/api/themes/THEME-001/preview/index.html",
            "/api/themes/THEME-001/files",
        ] {
            let response = app.get(uri).await;
            assert_eq!(response.status, 500, "{uri}");
            assert_eq!(response.json()["error"], "Internal server error", "{uri}");
            assert!(!response.body.contains("connection refused"), "{uri}");
        }
    }

    /// CONTRACT: Unknown routes are a JSON 404.
    #[tokio::test]
    async fn contract_unknown_route_is_404() {
        let app = TestApp::fixture();

        let response = app.get("/themes/THEME-001/files/x.css").await;

        assert_eq!(response.status, 404);
        assert_eq!(response.json()["success"], false);
    }
}

mod listing {
    use super::*;

    /// CONTRACT: Listing returns every file of the theme, sorted by path.
    #[tokio::test]
    async fn contract_listing_is_sorted_and_complete() {
        let app = TestApp::fixture();

        let response = app.get("/api/themes/THEME-001/files").await;

        assert_eq!(response.status, 200);
        let body = response.json();
        assert_eq!(body["success"], true);

        let paths: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["path"].as_str().unwrap())
            .collect();
        let mut sorted = paths.clone();
        sorted.sort_unstable();

        assert_eq!(paths, sorted);
        assert_eq!(paths.len(), fixture_files().len());
        assert_eq!(body["data"][0]["path"], "components/buttons.html");
        assert_eq!(body["data"][0]["type"], "html");
        assert!(body["data"][0]["sizeBytes"].is_u64());
        assert!(body["data"][0]["createdAt"].is_string());
    }

    /// CONTRACT: Listing an unknown theme is a 404.
    #[tokio::test]
    async fn contract_unknown_theme_listing_is_404() {
        let app = TestApp::fixture();

        let response = app.get("/api/themes/THEME-404/files").await;

        assert_eq!(response.status, 404);
        assert_eq!(response.json()["error"], "Theme not found");
    }

    /// CONTRACT: Health reports ok.
    #[tokio::test]
    async fn contract_health_is_ok() {
        let app = TestApp::new(BrokenStore);

        let response = app.get("/api/health").await;

        assert_eq!(response.status, 200);
        assert_eq!(response.json()["data"]["status"], "ok");
    }
}

mod blocking_store {
    use super::*;

    /// CONTRACT: Store lookups run off the async workers, so a blocking backend is safe.
    #[tokio::test]
    async fn contract_lookups_run_on_blocking_pool() {
        let app = TestApp::new(BlockingStore::fixture());

        let file = app.get("/api/themes/THEME-001/files/mockups/styles.css").await;
        assert_eq!(file.status, 200);
        assert_eq!(file.body, STYLES_CSS);

        let preview = app
            .get("/api/themes/THEME-001/preview/components/buttons.html")
            .await;
        assert_eq!(preview.status, 200);

        let listing = app.get("/api/themes/THEME-001/files").await;
        assert_eq!(listing.status, 200);
    }

    /// CONTRACT: Concurrent requests against a blocking store all complete.
    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn contract_concurrent_requests_complete() {
        let app = std::sync::Arc::new(TestApp::new(BlockingStore::fixture()));

        let requests: Vec<_> = ["mockups/styles.css", "mockups/script.js", "x.css", "notes.md"]
            .into_iter()
            .map(|path| {
                let app = app.clone();
                tokio::spawn(async move { app.get(&format!("/api/themes/THEME-001/files/{path}")).await })
            })
            .collect();

        for request in requests {
            assert_eq!(request.await.unwrap().status, 200);
        }
    }
}
