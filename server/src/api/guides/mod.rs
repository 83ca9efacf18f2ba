pub mod aggregates;
pub mod categories;
pub mod get;
pub mod list;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/guides endpoints (public)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_guides))
        .route("/categories", get(categories::list_categories))
        .route("/{id}", get(get::get_guide))
}

#[derive(OpenApi)]
#[openapi(
    paths(list::list_guides, get::get_guide, categories::list_categories),
    components(schemas(
        aggregates::GuideWithCategories,
        categories::CategoryResponse,
    ))
)]
pub struct ApiDoc;
