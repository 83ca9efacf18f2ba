use crate::api::posts::aggregates::{load_post_details, Author, PostDetail};
use crate::api::ErrorResponse;
use crate::get_conn;
use crate::models::Post;
use crate::schema::{posts, users};
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
    path = "/api/posts/{id}",
    tag = "posts",
    params(
        ("id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post details", body = PostDetail),
        (status = 404, description = "Post not found", body = ErrorResponse)
    )
)]
pub async fn get_post(State(app): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    let mut conn = get_conn!(app.pool);

    let row: (Post, Author) = match posts::table
        .inner_join(users::table)
        .filter(posts::id.eq(id))
        .select((
            Post::as_select(),
            (users::id, users::name, users::profile_picture),
        ))
        .first(&mut conn)
    {
        Ok(row) => row,
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
                    error: "Failed to fetch post".to_string(),
                }),
            )
                .into_response();
        }
    };

    let details = match load_post_details(&mut conn, vec![row]) {
        Ok(mut details) => details.remove(0),
        Err(e) => {
            tracing::error!("Failed to fetch post details: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch post".to_string(),
                }),
            )
                .into_response();
        }
    };

    (StatusCode::OK, Json(details)).into_response()
}
