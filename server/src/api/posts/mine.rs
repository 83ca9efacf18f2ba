use crate::api::posts::aggregates::{comments_by_post, technique_names_by_post, CommentWithAuthor};
use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::get_conn;
use crate::models::Post;
use crate::schema::posts;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// A post as seen by its owner; drafts included, no author block.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MyPost {
    pub id: i32,
    pub description: Option<String>,
    pub post_picture: String,
    pub post_date: DateTime<Utc>,
    pub likes: i32,
    pub is_published: bool,
    pub techniques: Vec<String>,
    pub comments: Vec<CommentWithAuthor>,
}

#[utoipa::path(
    get,
    path = "/api/posts/user/me",
    tag = "posts",
    responses(
        (status = 200, description = "All posts of the authenticated user, drafts included", body = [MyPost]),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn my_posts(AuthUser(user): AuthUser, State(app): State<AppState>) -> impl IntoResponse {
    let mut conn = get_conn!(app.pool);

    let rows: Vec<Post> = match posts::table
        .filter(posts::user_id.eq(user.id))
        .order(posts::post_date.desc())
        .select(Post::as_select())
        .load(&mut conn)
    {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("Failed to fetch posts: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch your posts".to_string(),
                }),
            )
                .into_response();
        }
    };

    let post_ids: Vec<i32> = rows.iter().map(|post| post.id).collect();

    let mut techniques = match technique_names_by_post(&mut conn, &post_ids) {
        Ok(map) => map,
        Err(e) => {
            tracing::error!("Failed to fetch post techniques: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch your posts".to_string(),
                }),
            )
                .into_response();
        }
    };

    let mut comments = match comments_by_post(&mut conn, &post_ids) {
        Ok(map) => map,
        Err(e) => {
            tracing::error!("Failed to fetch post comments: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch your posts".to_string(),
                }),
            )
                .into_response();
        }
    };

    let result: Vec<MyPost> = rows
        .into_iter()
        .map(|post| MyPost {
            id: post.id,
            description: post.description,
            post_picture: post.post_picture,
            post_date: post.post_date,
            likes: post.likes,
            is_published: post.is_published,
            techniques: techniques.remove(&post.id).unwrap_or_default(),
            comments: comments.remove(&post.id).unwrap_or_default(),
        })
        .collect();

    (StatusCode::OK, Json(result)).into_response()
}
