use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::get_conn;
use crate::schema::posts;
use crate::uploads;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;

#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    tag = "posts",
    params(
        ("id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 204, description = "Post deleted successfully"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_post(
    AuthUser(user): AuthUser,
    State(app): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    let mut conn = get_conn!(app.pool);

    // Ownership check; a foreign post is indistinguishable from a missing one
    let picture: String = match posts::table
        .filter(posts::id.eq(id))
        .filter(posts::user_id.eq(user.id))
        .select(posts::post_picture)
        .first(&mut conn)
    {
        Ok(p) => p,
        Err(diesel::NotFound) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Post not found".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to fetch post: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to delete post".to_string(),
                }),
            )
                .into_response();
        }
    };

    // Comments and technique associations go with the row via ON DELETE CASCADE
    if let Err(e) = diesel::delete(posts::table.find(id)).execute(&mut conn) {
        tracing::error!("Failed to delete post: {}", e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to delete post".to_string(),
            }),
        )
            .into_response();
    }

    // Best effort; the row is already gone
    uploads::remove_image(&app.config.uploads_dir, &picture).await;

    StatusCode::NO_CONTENT.into_response()
}
