//! # Almanac Server
//!
//! Axum server that embeds the frontend shell and serves the catalog API.
//! The catalog index is built once before binding and shared read-only by
//! every request.

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use rust_embed::RustEmbed;
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use almanac_core::catalog::CatalogIndex;

use crate::api::api_routes;
use crate::config::ServerConfig;

/// Embedded frontend assets
#[derive(RustEmbed)]
#[folder = "../../apps/frontend/dist"]
struct Assets;

/// Application state
pub struct AppState {
    pub index: &'static CatalogIndex,
}

pub type SharedState = Arc<AppState>;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    entries: usize,
}

async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        entries: state.index.len(),
    })
}

async fn serve_static(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    if let Some(file) = Assets::get(path) {
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        return (
            [(header::CONTENT_TYPE, mime.to_string())],
            file.data.into_owned(),
        )
            .into_response();
    }

    // SPA fallback
    if let Some(file) = Assets::get("index.html") {
        return (
            [(header::CONTENT_TYPE, "text/html".to_string())],
            file.data.into_owned(),
        )
            .into_response();
    }

    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

pub fn build_router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api/v1", api_routes())
        .route("/health", get(health))
        .fallback(get(serve_static))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

// === Server Entry ===

pub async fn run_server(config: &ServerConfig, index: &'static CatalogIndex) -> anyhow::Result<()> {
    let state: SharedState = Arc::new(AppState { index });
    let app = build_router(state);

    let addr = config.addr();
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(%addr, entries = index.len(), "Almanac server listening");
    tracing::info!("API v1 routes: /api/v1/categories, /api/v1/entries, /api/v1/items");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Almanac server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
