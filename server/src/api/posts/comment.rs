use crate::api::posts::aggregates::{Author, CommentWithAuthor};
use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::get_conn;
use crate::models::{Comment, NewComment};
use crate::schema::{comments, posts, users};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AddCommentRequest {
    pub content: String,
}

#[utoipa::path(
    post,
    path = "/api/posts/{id}/comments",
    tag = "posts",
    params(
        ("id" = i32, Path, description = "Post ID")
    ),
    request_body = AddCommentRequest,
    responses(
        (status = 201, description = "Comment added", body = CommentWithAuthor),
        (status = 400, description = "Missing content", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn add_comment(
    AuthUser(user): AuthUser,
    State(app): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<AddCommentRequest>,
) -> impl IntoResponse {
    if req.content.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Comment content is required".to_string(),
            }),
        )
            .into_response();
    }

    let mut conn = get_conn!(app.pool);

    let post_exists = match posts::table
        .find(id)
        .select(posts::id)
        .first::<i32>(&mut conn)
    {
        Ok(_) => true,
        Err(diesel::NotFound) => false,
        Err(e) => {
            tracing::error!("Failed to check post: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to add comment".to_string(),
                }),
            )
                .into_response();
        }
    };

    if !post_exists {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Post not found".to_string(),
            }),
        )
            .into_response();
    }

    let comment: Comment = match diesel::insert_into(comments::table)
        .values(&NewComment {
            post_id: id,
            user_id: user.id,
            content: req.content.trim(),
        })
        .returning(Comment::as_returning())
        .get_result(&mut conn)
    {
        Ok(comment) => comment,
        Err(e) => {
            tracing::error!("Failed to add comment: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to add comment".to_string(),
                }),
            )
                .into_response();
        }
    };

    let author: Author = match users::table
        .find(user.id)
        .select((users::id, users::name, users::profile_picture))
        .first(&mut conn)
    {
        Ok(author) => author,
        Err(e) => {
            tracing::error!("Failed to fetch comment author: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to add comment".to_string(),
                }),
            )
                .into_response();
        }
    };

    (
        StatusCode::CREATED,
        Json(CommentWithAuthor {
            id: comment.id,
            content: comment.content,
            comment_date: comment.comment_date,
            user: author,
        }),
    )
        .into_response()
}
