//! # Catalog API
//!
//! Read-only endpoints over the shared catalog index: the tab strip, the
//! browse/search result list, and single-topic lookup by url.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use almanac_core::catalog::{BrowseRequest, CategorySummary, FlattenedEntry};

use super::error::{ApiError, ApiErrorResponse};
use crate::server::SharedState;

// === API Types ===

/// One tab in the home page tab strip
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryResponse {
    name: String,
    /// Glyph reference; absent for the synthetic "All" tab
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<String>,
    count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoriesResponse {
    categories: Vec<CategoryResponse>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EntriesQuery {
    /// Selected tab, "All" when omitted
    category: Option<String>,
    /// Title search; when non-empty it searches every category
    search: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntryResponse {
    category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    sub_category: Option<String>,
    title: String,
    url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    publish_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntriesResponse {
    active_category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<String>,
    global_search: bool,
    total: usize,
    entries: Vec<EntryResponse>,
    /// Empty-state text such as "No results for 'zzz'"
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemQuery {
    /// Detail page url exactly as listed in the catalog
    url: Option<String>,
}

impl From<CategorySummary<'_>> for CategoryResponse {
    fn from(summary: CategorySummary<'_>) -> Self {
        Self {
            name: summary.name.to_string(),
            icon: summary.icon.map(str::to_string),
            count: summary.count,
        }
    }
}

impl From<&FlattenedEntry> for EntryResponse {
    fn from(entry: &FlattenedEntry) -> Self {
        let item = entry.item.clone();
        Self {
            category: entry.category.clone(),
            sub_category: entry.sub_category.clone(),
            title: item.title,
            url: item.url,
            description: item.description,
            author: item.author,
            publish_date: item.publish_date,
            image: item.image,
        }
    }
}

pub fn catalog_routes() -> Router<SharedState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/entries", get(list_entries))
        .route("/items", get(get_item))
}

// === Handlers ===

/// List the "All" tab followed by every category
#[utoipa::path(
    get,
    path = "/api/v1/categories",
    tag = "catalog",
    responses(
        (status = 200, description = "Tabs in browse order", body = CategoriesResponse)
    )
)]
pub(crate) async fn list_categories(State(state): State<SharedState>) -> Json<CategoriesResponse> {
    let categories = state
        .index
        .summaries()
        .into_iter()
        .map(CategoryResponse::from)
        .collect();
    Json(CategoriesResponse { categories })
}

/// Browse a tab, or search titles across every tab
#[utoipa::path(
    get,
    path = "/api/v1/entries",
    tag = "catalog",
    params(EntriesQuery),
    responses(
        (status = 200, description = "Matching entries in catalog order", body = EntriesResponse)
    )
)]
#[tracing::instrument(skip(state))]
pub(crate) async fn list_entries(
    State(state): State<SharedState>,
    Query(query): Query<EntriesQuery>,
) -> Json<EntriesResponse> {
    let request = BrowseRequest {
        category: query.category,
        search: query.search,
    };
    let view = state.index.browse(&request);

    Json(EntriesResponse {
        active_category: view.active_category,
        search: view.search,
        global_search: view.global_search,
        total: view.entries.len(),
        entries: view.entries.into_iter().map(EntryResponse::from).collect(),
        message: view.message,
    })
}

/// Resolve a detail page url to its topic
#[utoipa::path(
    get,
    path = "/api/v1/items",
    tag = "catalog",
    params(ItemQuery),
    responses(
        (status = 200, description = "Topic listed at this url", body = EntryResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 404, body = ApiErrorResponse)
    )
)]
pub(crate) async fn get_item(
    State(state): State<SharedState>,
    Query(query): Query<ItemQuery>,
) -> Result<Json<EntryResponse>, ApiError> {
    let url = match query.url.as_deref() {
        Some(url) if !url.trim().is_empty() => url,
        _ => return Err(ApiError::bad_request("url must not be empty")),
    };

    state
        .index
        .item_by_url(url)
        .map(|entry| Json(EntryResponse::from(entry)))
        .ok_or_else(|| ApiError::not_found(format!("no topic at '{}'", url)))
}

#[cfg(test)]
mod tests {
    use crate::server::{build_router, AppState};
    use almanac_core::catalog::CatalogIndex;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let index = CatalogIndex::builtin().unwrap();
        build_router(Arc::new(AppState { index }))
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_categories_lead_with_all() {
        let (status, body) = get_json("/api/v1/categories").await;
        assert_eq!(status, StatusCode::OK);

        let categories = body["categories"].as_array().unwrap();
        assert_eq!(categories[0]["name"], "All");
        assert!(categories[0].get("icon").is_none());
        assert_eq!(categories[1]["name"], "Astronomy");
        assert_eq!(categories[1]["icon"], "telescope");
    }

    #[tokio::test]
    async fn test_entries_default_to_all() {
        let (status, body) = get_json("/api/v1/entries").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["activeCategory"], "All");
        assert_eq!(
            body["total"].as_u64().unwrap() as usize,
            CatalogIndex::builtin().unwrap().len()
        );
    }

    #[tokio::test]
    async fn test_entries_filter_by_category() {
        let (_, body) = get_json("/api/v1/entries?category=Earth%20Science").await;
        let entries = body["entries"].as_array().unwrap();
        assert!(!entries.is_empty());
        assert!(entries.iter().all(|e| e["category"] == "Earth Science"));
        assert_eq!(entries[0]["title"], "Mountains as Pegs");
        assert_eq!(entries[1]["subCategory"], "Oceans");
    }

    #[tokio::test]
    async fn test_search_overrides_category_and_keeps_tab() {
        let (_, body) = get_json("/api/v1/entries?category=Biology&search=SIRIUS").await;
        assert_eq!(body["activeCategory"], "Biology");
        assert_eq!(body["globalSearch"], true);
        assert_eq!(body["total"], 1);
        assert_eq!(body["entries"][0]["url"], "/astronomy/sirius");
    }

    #[tokio::test]
    async fn test_no_results_message() {
        let (status, body) = get_json("/api/v1/entries?search=zzz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 0);
        assert_eq!(body["message"], "No results for 'zzz'");

        let (_, body) = get_json("/api/v1/entries?category=NotACategory").await;
        assert_eq!(body["message"], "No items found");
    }

    #[tokio::test]
    async fn test_item_lookup() {
        let (status, body) = get_json("/api/v1/items?url=%2Fbiology%2Fhoney").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["category"], "Biology");
        assert_eq!(body["subCategory"], "Animals");
        assert_eq!(body["publishDate"], "June 2023");

        let (status, body) = get_json("/api/v1/items?url=%2Fbiology%2Flocusts").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["ok"], false);
        assert_eq!(body["error"]["code"], "not_found");

        let (status, body) = get_json("/api/v1/items?url=").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "bad_request");
    }

    #[tokio::test]
    async fn test_item_lookup_without_url_is_json_error() {
        let (status, body) = get_json("/api/v1/items").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["ok"], false);
        assert_eq!(body["error"]["code"], "bad_request");
        assert_eq!(body["error"]["message"], "url must not be empty");
    }

    #[tokio::test]
    async fn test_health_and_openapi() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");

        let (status, body) = get_json("/api/v1/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"].get("/api/v1/entries").is_some());
    }
}
