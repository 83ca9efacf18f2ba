use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::get_conn;
use crate::models::NewProject;
use crate::schema::{cultivation_techniques, projects};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateProjectRequest {
    pub name: String,
    pub width: f64,
    pub length: f64,
    pub height: f64,
    pub location: String,
    pub city: String,
    pub description: String,
    pub technique_id: i32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreateProjectResponse {
    pub id: i32,
}

#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Project created successfully", body = CreateProjectResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_project(
    AuthUser(user): AuthUser,
    State(app): State<AppState>,
    Json(req): Json<CreateProjectRequest>,
) -> impl IntoResponse {
    if req.name.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Project name is required".to_string(),
            }),
        )
            .into_response();
    }

    if req.width <= 0.0 || req.length <= 0.0 || req.height <= 0.0 {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Dimensions must be positive".to_string(),
            }),
        )
            .into_response();
    }

    let mut conn = get_conn!(app.pool);

    let technique_known = match cultivation_techniques::table
        .find(req.technique_id)
        .select(cultivation_techniques::id)
        .first::<i32>(&mut conn)
    {
        Ok(_) => true,
        Err(diesel::NotFound) => false,
        Err(e) => {
            tracing::error!("Failed to check technique: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create project".to_string(),
                }),
            )
                .into_response();
        }
    };

    if !technique_known {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Unknown cultivation technique".to_string(),
            }),
        )
            .into_response();
    }

    let project_id: i32 = match diesel::insert_into(projects::table)
        .values(&NewProject {
            user_id: user.id,
            name: req.name.trim(),
            width: req.width,
            length: req.length,
            height: req.height,
            location: &req.location,
            city: &req.city,
            description: &req.description,
            technique_id: req.technique_id,
        })
        .returning(projects::id)
        .get_result(&mut conn)
    {
        Ok(id) => id,
        Err(e) => {
            tracing::error!("Failed to create project: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create project".to_string(),
                }),
            )
                .into_response();
        }
    };

    (
        StatusCode::CREATED,
        Json(CreateProjectResponse { id: project_id }),
    )
        .into_response()
}
