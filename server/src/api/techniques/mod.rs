pub mod get;
pub mod list;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::models::CultivationTechnique;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TechniqueResponse {
    pub id: i32,
    pub name: String,
}

impl From<CultivationTechnique> for TechniqueResponse {
    fn from(technique: CultivationTechnique) -> Self {
        Self {
            id: technique.id,
            name: technique.name,
        }
    }
}

/// Returns the router for /api/techniques endpoints (public)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_techniques))
        .route("/{id}", get(get::get_technique))
}

#[derive(OpenApi)]
#[openapi(
    paths(list::list_techniques, get::get_technique),
    components(schemas(TechniqueResponse))
)]
pub struct ApiDoc;
