use crate::api::projects::ProjectResponse;
use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::get_conn;
use crate::models::Project;
use crate::schema::{cultivation_techniques, projects};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    responses(
        (status = 200, description = "Projects of the authenticated user, newest first", body = [ProjectResponse]),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_projects(
    AuthUser(user): AuthUser,
    State(app): State<AppState>,
) -> impl IntoResponse {
    let mut conn = get_conn!(app.pool);

    let rows: Vec<(Project, String)> = match projects::table
        .inner_join(cultivation_techniques::table)
        .filter(projects::user_id.eq(user.id))
        .order(projects::created_at.desc())
        .select((Project::as_select(), cultivation_techniques::name))
        .load(&mut conn)
    {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("Failed to fetch projects: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch projects".to_string(),
                }),
            )
                .into_response();
        }
    };

    let result: Vec<ProjectResponse> = rows
        .into_iter()
        .map(|(project, technique)| ProjectResponse::new(project, technique))
        .collect();

    (StatusCode::OK, Json(result)).into_response()
}
