//! Router tests for the SSR server
//!
//! Each test builds the full router over a temporary site root laid out the
//! way cargo-leptos writes it: the wasm bundle under `pkg/`, copied assets
//! under `assets/`.

#![cfg(feature = "ssr")]

use std::fs;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use leptos::LeptosOptions;
use rstest::{fixture, rstest};
use tempfile::TempDir;
use tower::ServiceExt;

use docs_site::server::build_router;

const BUNDLE: &str = "export default function init() {}";
const FAVICON: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\"/>";

struct TestSite {
    _root: TempDir,
    router: Router,
}

impl TestSite {
    async fn get(&self, uri: &str) -> (StatusCode, String) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════════════════════
// FIXTURES
// ═══════════════════════════════════════════════════════════════════════════════════════════════

#[fixture]
fn site() -> TestSite {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir_all(root.path().join("pkg")).unwrap();
    fs::write(root.path().join("pkg/docs-site.js"), BUNDLE).unwrap();
    fs::create_dir_all(root.path().join("assets")).unwrap();
    fs::write(root.path().join("assets/favicon.svg"), FAVICON).unwrap();

    let options = LeptosOptions::builder()
        .output_name("docs-site")
        .site_root(root.path().to_string_lossy().into_owned())
        .site_pkg_dir("pkg")
        .build();

    TestSite {
        router: build_router(options),
        _root: root,
    }
}

// ═══════════════════════════════════════════════════════════════════════════════════════════════
// STATIC FILES
// ═══════════════════════════════════════════════════════════════════════════════════════════════

/// The hydration bundle is served from the site root, not the not-found page
#[rstest]
#[tokio::test]
async fn test_serves_wasm_bundle(site: TestSite) {
    let (status, body) = site.get("/pkg/docs-site.js").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, BUNDLE);
}

/// A missing bundle file is a plain 404, not a rendered page
#[rstest]
#[tokio::test]
async fn test_missing_bundle_file_is_not_found(site: TestSite) {
    let (status, body) = site.get("/pkg/missing.wasm").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(!body.contains("Page not found"));
}

/// Assets copied by cargo-leptos live under the site root
#[rstest]
#[tokio::test]
async fn test_serves_assets_from_site_root(site: TestSite) {
    let (status, body) = site.get("/assets/favicon.svg").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, FAVICON);
}

// ═══════════════════════════════════════════════════════════════════════════════════════════════
// PAGES
// ═══════════════════════════════════════════════════════════════════════════════════════════════

#[rstest]
#[tokio::test]
async fn test_health_endpoint(site: TestSite) {
    let (status, body) = site.get("/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

/// Every navigation target renders its section page with the navbar
#[rstest]
#[case("/docs", "Articles on cleaning and reshaping data")]
#[case("/docs/guides", "Step-by-step walkthroughs")]
#[case("/docs/reference", "Concise notes on individual pandas operations")]
#[tokio::test]
async fn test_renders_doc_sections(site: TestSite, #[case] uri: &str, #[case] summary: &str) {
    let (status, body) = site.get(uri).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(summary), "summary missing on {uri}");
    assert!(body.contains("data-icon=\"menu\""));
    assert!(!body.contains("id=\"mobile-menu\""));
}

/// The rendered shell loads the hydration bundle
#[rstest]
#[tokio::test]
async fn test_page_references_bundle(site: TestSite) {
    let (status, body) = site.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/pkg/docs-site.js"));
}

#[rstest]
#[tokio::test]
async fn test_unknown_page_is_not_found(site: TestSite) {
    let (status, body) = site.get("/no/such/page").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found"));
}
