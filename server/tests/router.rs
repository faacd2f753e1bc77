//! Router integration tests.

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use folio_server::{ServerConfig, server::create_router};
use tempfile::TempDir;
use tower::ServiceExt;

fn site() -> (TempDir, Router) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let pkg = dir.path().join("pkg");
    std::fs::create_dir_all(&pkg).expect("create pkg dir");
    std::fs::write(pkg.join("folio.js"), "export default function init() {}").expect("write js");
    std::fs::write(dir.path().join("portrait.jpg"), [0xFF, 0xD8, 0xFF]).expect("write image");

    let config = ServerConfig {
        site_root: dir.path().to_path_buf(),
        base_url: "https://thomp.dev".to_string(),
        ..ServerConfig::default()
    };

    (dir, create_router(Arc::new(config)))
}

async fn get(router: Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, String::from_utf8_lossy(&body).into_owned())
}

#[tokio::test]
async fn test_page_routes_return_shell() {
    for uri in ["/", "/trips", "/trips/pacific-northwest-family-adventure"] {
        let (_dir, router) = site();
        let (status, body) = get(router, uri).await;

        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(body.contains("/pkg/folio.css"), "{uri}");
        assert!(body.contains("/pkg/folio.js"), "{uri}");
    }
}

#[tokio::test]
async fn test_unknown_trip_is_not_found() {
    let (_dir, router) = site();
    let (status, body) = get(router, "/trips/atlantis").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("/pkg/folio.js"));
}

#[tokio::test]
async fn test_robots_txt() {
    let (_dir, router) = site();
    let response = router
        .oneshot(
            Request::builder()
                .uri("/robots.txt")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/plain; charset=utf-8"
    );

    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let body = String::from_utf8_lossy(&body);
    assert!(body.contains("User-agent: *"));
    assert!(body.contains("Sitemap: https://thomp.dev/sitemap.xml"));
}

#[tokio::test]
async fn test_sitemap_xml() {
    let (_dir, router) = site();
    let (status, body) = get(router, "/sitemap.xml").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("<loc>").count(), 3);
    assert!(body.contains("<loc>https://thomp.dev/trips</loc>"));
}

#[tokio::test]
async fn test_pkg_files_served() {
    let (_dir, router) = site();
    let (status, body) = get(router, "/pkg/folio.js").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("export default function init"));
}

#[tokio::test]
async fn test_static_assets_served() {
    let (_dir, router) = site();
    let (status, _) = get(router, "/portrait.jpg").await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_missing_asset_is_not_found() {
    let (_dir, router) = site();
    let (status, _) = get(router, "/logos/missing.svg").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
