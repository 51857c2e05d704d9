//! HTTP API surface. Routes live under `/api/v1`.

pub mod catalog;
pub mod error;

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::server::SharedState;
use catalog::{CategoriesResponse, CategoryResponse, EntriesResponse, EntryResponse};
use error::{ApiErrorBody, ApiErrorResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Almanac API",
        version = "1.0.0",
        description = "Read-only access to the science and scripture topic catalog"
    ),
    paths(catalog::list_categories, catalog::list_entries, catalog::get_item),
    components(schemas(
        CategoriesResponse,
        CategoryResponse,
        EntriesResponse,
        EntryResponse,
        ApiErrorResponse,
        ApiErrorBody
    )),
    tags((name = "catalog", description = "Catalog browsing and search"))
)]
pub struct ApiDoc;

/// Everything mounted under `/api/v1`.
pub fn api_routes() -> Router<SharedState> {
    catalog::catalog_routes().route("/openapi.json", get(serve_openapi))
}

async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
