use crate::api::projects::ProjectResponse;
use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::get_conn;
use crate::models::Project;
use crate::schema::{cultivation_techniques, projects};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "projects",
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project details", body = ProjectResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_project(
    AuthUser(user): AuthUser,
    State(app): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    let mut conn = get_conn!(app.pool);

    // Ownership check; a foreign project is indistinguishable from a missing one
    let row: (Project, String) = match projects::table
        .inner_join(cultivation_techniques::table)
        .filter(projects::id.eq(id))
        .filter(projects::user_id.eq(user.id))
        .select((Project::as_select(), cultivation_techniques::name))
        .first(&mut conn)
    {
        Ok(row) => row,
        Err(diesel::NotFound) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Project not found".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to fetch project: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch project".to_string(),
                }),
            )
                .into_response();
        }
    };

    let (project, technique) = row;
    (StatusCode::OK, Json(ProjectResponse::new(project, technique))).into_response()
}
