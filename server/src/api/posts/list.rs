use crate::api::posts::aggregates::{load_post_details, Author, PostDetail};
use crate::api::ErrorResponse;
use crate::get_conn;
use crate::models::Post;
use crate::schema::{post_techniques, posts, users};
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::dsl::exists;
use diesel::prelude::*;
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListPostsParams {
    /// Only posts tagged with this cultivation technique
    pub technique_id: Option<i32>,
    /// Only posts by this user
    pub user_id: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "posts",
    params(ListPostsParams),
    responses(
        (status = 200, description = "The public feed, newest first", body = [PostDetail])
    )
)]
pub async fn list_posts(
    State(app): State<AppState>,
    Query(params): Query<ListPostsParams>,
) -> impl IntoResponse {
    let mut conn = get_conn!(app.pool);

    // Only published posts ever appear in the feed; filters compose on top
    let mut query = posts::table
        .inner_join(users::table)
        .filter(posts::is_published.eq(true))
        .into_boxed();

    if let Some(technique_id) = params.technique_id {
        query = query.filter(exists(
            post_techniques::table
                .filter(post_techniques::post_id.eq(posts::id))
                .filter(post_techniques::technique_id.eq(technique_id)),
        ));
    }

    if let Some(user_id) = params.user_id {
        query = query.filter(posts::user_id.eq(user_id));
    }

    let rows: Vec<(Post, Author)> = match query
        .order(posts::post_date.desc())
        .select((
            Post::as_select(),
            (users::id, users::name, users::profile_picture),
        ))
        .load(&mut conn)
    {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("Failed to fetch posts: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch posts".to_string(),
                }),
            )
                .into_response();
        }
    };

    let details = match load_post_details(&mut conn, rows) {
        Ok(details) => details,
        Err(e) => {
            tracing::error!("Failed to fetch post details: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch posts".to_string(),
                }),
            )
                .into_response();
        }
    };

    (StatusCode::OK, Json(details)).into_response()
}
