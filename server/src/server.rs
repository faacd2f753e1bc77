//! HTTP routes.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use folio_core::content;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::debug;

use crate::{config::ServerConfig, robots, shell, sitemap};

/// Create the site router.
///
/// Page routes return the HTML shell; `/{pkg}` and everything else are
/// served from disk.
pub fn create_router(config: Arc<ServerConfig>) -> Router {
    let pkg_route = format!("/{}", config.site_pkg_dir.trim_matches('/'));
    let pkg_dir = ServeDir::new(config.pkg_path());
    let site_dir = ServeDir::new(&config.site_root);

    Router::new()
        .route("/", get(page))
        .route("/trips", get(page))
        .route("/trips/{slug}", get(itinerary))
        .route("/robots.txt", get(robots_txt))
        .route("/sitemap.xml", get(sitemap_xml))
        .nest_service(&pkg_route, pkg_dir)
        .fallback_service(site_dir)
        .layer(TraceLayer::new_for_http())
        .with_state(config)
}

async fn page(State(config): State<Arc<ServerConfig>>) -> Html<String> {
    Html(shell::render(&config))
}

/// Unknown slugs still get the shell, which renders the not-found view.
async fn itinerary(
    State(config): State<Arc<ServerConfig>>,
    Path(slug): Path<String>,
) -> Response {
    let status = if content::trip_by_slug(&slug).is_some() {
        StatusCode::OK
    } else {
        debug!(slug = %slug, "unknown itinerary");
        StatusCode::NOT_FOUND
    };

    (status, Html(shell::render(&config))).into_response()
}

async fn robots_txt(State(config): State<Arc<ServerConfig>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        robots::render(&config),
    )
}

async fn sitemap_xml(State(config): State<Arc<ServerConfig>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/xml")],
        sitemap::render(&config, &content::page_paths()),
    )
}
