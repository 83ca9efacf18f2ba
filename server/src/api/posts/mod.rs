pub mod aggregates;
pub mod comment;
pub mod create;
pub mod delete;
pub mod form;
pub mod get;
pub mod like;
pub mod list;
pub mod mine;
pub mod update;

use crate::AppState;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post, put};
use axum::Router;
use utoipa::OpenApi;

use crate::uploads::MAX_FILE_SIZE;

/// Returns the router for public post endpoints (the feed, no auth required)
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_posts))
        .route("/{id}", get(get::get_post))
}

/// Returns the router for protected post endpoints (mounted at /api/posts)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create::create_post))
        .route("/user/me", get(mine::my_posts))
        .route(
            "/{id}",
            put(update::update_post).delete(delete::delete_post),
        )
        .route("/{id}/like", post(like::like_post))
        .route("/{id}/comments", post(comment::add_comment))
        // Room for the image plus the other multipart fields
        .layer(DefaultBodyLimit::max(MAX_FILE_SIZE + 64 * 1024))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_post,
        list::list_posts,
        get::get_post,
        mine::my_posts,
        update::update_post,
        delete::delete_post,
        like::like_post,
        comment::add_comment,
    ),
    components(schemas(
        aggregates::Author,
        aggregates::CommentWithAuthor,
        aggregates::PostDetail,
        aggregates::PostWithTechniques,
        create::CreatePostRequest,
        update::UpdatePostRequest,
        mine::MyPost,
        like::LikeResponse,
        comment::AddCommentRequest,
    ))
)]
pub struct ApiDoc;
