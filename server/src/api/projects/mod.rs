pub mod create;
pub mod delete;
pub mod generate_model;
pub mod get;
pub mod list;

use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::models::Project;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProjectResponse {
    pub id: i32,
    pub name: String,
    pub width: f64,
    pub length: f64,
    pub height: f64,
    pub location: String,
    pub city: String,
    pub description: String,
    pub technique_id: i32,
    pub technique: String,
    pub model_file: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ProjectResponse {
    pub fn new(project: Project, technique: String) -> Self {
        Self {
            id: project.id,
            name: project.name,
            width: project.width,
            length: project.length,
            height: project.height,
            location: project.location,
            city: project.city,
            description: project.description,
            technique_id: project.technique_id,
            technique,
            model_file: project.model_file,
            created_at: project.created_at,
        }
    }
}

/// Returns the router for /api/projects endpoints (mounted at /api/projects)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_projects).post(create::create_project))
        .route("/{id}", get(get::get_project).delete(delete::delete_project))
        .route("/{id}/generate-model", post(generate_model::generate_model))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_project,
        list::list_projects,
        get::get_project,
        delete::delete_project,
        generate_model::generate_model,
    ),
    components(schemas(
        ProjectResponse,
        create::CreateProjectRequest,
        create::CreateProjectResponse,
        generate_model::GenerateModelRequest,
    ))
)]
pub struct ApiDoc;
