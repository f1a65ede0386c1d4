use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use linkcard::domain::{SiteOrigin, SlotCount};
use linkcard::infrastructure::ids::IdGenerator;
use linkcard::server::router::{AppState, create_router};

/// Deterministic stand-in for the UUID generator.
struct FixedIds(&'static str);

impl IdGenerator for FixedIds {
    fn generate(&self) -> String {
        self.0.to_string()
    }
}

fn test_router(public_dir: PathBuf, id: &'static str) -> Router {
    let state = Arc::new(AppState {
        site_origin: SiteOrigin::new("https://example.test").unwrap(),
        image_count: SlotCount::new(1000).unwrap(),
        public_dir,
        ids: Arc::new(FixedIds(id)),
    });
    create_router(state)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn ogp_redirects_to_identifier_pair() {
    let tmp = tempfile::tempdir().unwrap();
    let router = test_router(tmp.path().to_path_buf(), "fixed-id");

    let response = router.oneshot(get("/ogp")).await.unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    let location = response.headers()[header::LOCATION].to_str().unwrap();
    assert_eq!(location, "/ogp/fixed-id/fixed-id");

    let segments: Vec<&str> = location.trim_start_matches('/').split('/').collect();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0], "ogp");
}

#[tokio::test]
async fn preview_page_pins_image_to_identifier() {
    let tmp = tempfile::tempdir().unwrap();
    // The fresh second identifier will be "a", which selects slot 98.
    let router = test_router(tmp.path().to_path_buf(), "a");

    let response = router.oneshot(get("/ogp/some-shared-id")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/html; charset=utf-8"
    );

    let body = body_string(response).await;
    assert!(body.contains(
        "<meta property=\"og:image\" content=\"https://example.test/images/ogp/0098.png\">"
    ));
    assert!(body.contains(
        "<meta property=\"og:url\" content=\"https://example.test/ogp/some-shared-id/a\">"
    ));
    assert!(body.contains("summary_large_image"));
}

#[tokio::test]
async fn canonical_pair_url_falls_through_to_fresh_redirect() {
    // /ogp/{id1}/{id2} is intentionally unrouted; it behaves like any
    // other unmatched GET.
    let tmp = tempfile::tempdir().unwrap();
    let router = test_router(tmp.path().to_path_buf(), "fresh");

    let response = router.oneshot(get("/ogp/one/two")).await.unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()[header::LOCATION].to_str().unwrap(),
        "/ogp/fresh"
    );
}

#[tokio::test]
async fn static_assets_take_precedence_over_fallback() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("hello.txt"), "static wins").unwrap();
    let router = test_router(tmp.path().to_path_buf(), "unused");

    let response = router.oneshot(get("/hello.txt")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "static wins");
}

#[tokio::test]
async fn unknown_get_redirects_to_fresh_preview() {
    let tmp = tempfile::tempdir().unwrap();
    let router = test_router(tmp.path().to_path_buf(), "fresh");

    let response = router.oneshot(get("/definitely/missing")).await.unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()[header::LOCATION].to_str().unwrap(),
        "/ogp/fresh"
    );
}

#[tokio::test]
async fn unknown_post_is_not_found() {
    let tmp = tempfile::tempdir().unwrap();
    let router = test_router(tmp.path().to_path_buf(), "unused");

    let request = Request::builder()
        .method("POST")
        .uri("/definitely/missing")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn hostile_identifier_is_escaped_in_the_document() {
    let tmp = tempfile::tempdir().unwrap();
    let router = test_router(tmp.path().to_path_buf(), "safe");

    let response = router
        .oneshot(get("/ogp/%3Cevil%3E%22onload%3Dx%22"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("&lt;evil&gt;&quot;onload=x&quot;"));
    assert!(!body.contains("/ogp/<evil>"));
}
