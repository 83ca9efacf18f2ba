use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::get_conn;
use crate::schema::posts;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LikeResponse {
    /// The new like count
    pub likes: i32,
}

// Likes are a plain counter with no per-user dedup; any authenticated caller
// can like a post any number of times. Dedup would need a table tracking who
// liked what.
#[utoipa::path(
    post,
    path = "/api/posts/{id}/like",
    tag = "posts",
    params(
        ("id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Like recorded", body = LikeResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn like_post(
    AuthUser(_user): AuthUser,
    State(app): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    let mut conn = get_conn!(app.pool);

    let likes: i32 = match diesel::update(posts::table.find(id))
        .set(posts::likes.eq(posts::likes + 1))
        .returning(posts::likes)
        .get_result(&mut conn)
    {
        Ok(likes) => likes,
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
            tracing::error!("Failed to like post: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to like post".to_string(),
                }),
            )
                .into_response();
        }
    };

    (StatusCode::OK, Json(LikeResponse { likes })).into_response()
}
