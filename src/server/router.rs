use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::{Path, Request, State},
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tower::ServiceExt;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::domain::{SiteOrigin, SlotCount};
use crate::infrastructure::ids::IdGenerator;

use super::preview::PreviewPage;

/// Shared state for the router
pub struct AppState {
    pub site_origin: SiteOrigin,
    pub image_count: SlotCount,
    pub public_dir: PathBuf,
    pub ids: Arc<dyn IdGenerator>,
}

/// Create the main router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/ogp", get(redirect_to_fresh_pair))
        .route("/ogp/{id1}", get(render_preview))
        .fallback(serve_public_or_redirect)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /ogp: mint a fresh identifier pair and send the client to the
/// shareable URL.
async fn redirect_to_fresh_pair(State(state): State<Arc<AppState>>) -> Response {
    let id1 = state.ids.generate();
    let id2 = state.ids.generate();

    debug!(%id1, %id2, "minted preview identifier pair");
    redirect_found(&format!("/ogp/{id1}/{id2}"))
}

/// GET /ogp/{id1}: render the preview document with a fresh second
/// identifier.
async fn render_preview(State(state): State<Arc<AppState>>, Path(id1): Path<String>) -> Response {
    let id2 = state.ids.generate();
    let page = PreviewPage::compose(&id1, &id2, &state.site_origin, state.image_count);

    info!(slot = %page.slot, image = %page.image_file, "rendered preview page");

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .body(Body::from(page.render()))
        .unwrap()
}

/// Everything else: public assets win; unmatched reads fall through to a
/// redirect at a fresh preview. Writes have no fallback and get a plain
/// 404.
async fn serve_public_or_redirect(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    if method != Method::GET && method != Method::HEAD {
        return (StatusCode::NOT_FOUND, "Not found").into_response();
    }

    let service = ServeDir::new(&state.public_dir).append_index_html_on_directories(true);
    let response = match service.oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response(),
    };

    if response.status() != StatusCode::NOT_FOUND {
        debug!(
            %method,
            %path,
            status = response.status().as_u16(),
            "served public asset"
        );
        return response;
    }

    let id1 = state.ids.generate();
    debug!(%path, %id1, "no matching asset, redirecting to fresh preview");
    redirect_found(&format!("/ogp/{id1}"))
}

/// Plain 302 Found. Built by hand: the status is part of the public
/// contract and axum's `Redirect::to` emits 303.
fn redirect_found(location: &str) -> Response {
    Response::builder()
        .status(StatusCode::FOUND)
        .header(header::LOCATION, location)
        .body(Body::empty())
        .unwrap()
}
