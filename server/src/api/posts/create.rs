use crate::api::posts::aggregates::{technique_names_for_post, PostWithTechniques};
use crate::api::posts::form::parse_post_form;
use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::models::{NewPost, NewPostTechnique, Post};
use crate::schema::{post_techniques, posts};
use crate::uploads;
use crate::AppState;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use utoipa::ToSchema;

#[derive(ToSchema)]
#[allow(dead_code)]
pub struct CreatePostRequest {
    #[schema(value_type = String, format = Binary)]
    pub post_picture: Vec<u8>,
    pub description: Option<String>,
    /// JSON-encoded array of technique ids, e.g. "[1,3]"
    pub techniques: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "posts",
    request_body(content_type = "multipart/form-data", content = CreatePostRequest),
    responses(
        (status = 201, description = "Post created successfully", body = PostWithTechniques),
        (status = 400, description = "Missing image or invalid fields", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_post(
    AuthUser(user): AuthUser,
    State(app): State<AppState>,
    multipart: Multipart,
) -> impl IntoResponse {
    let form = match parse_post_form(multipart).await {
        Ok(form) => form,
        Err((status, error)) => return (status, Json(ErrorResponse { error })).into_response(),
    };

    let image = match form.image {
        Some(image) => image,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "You must upload an image".to_string(),
                }),
            )
                .into_response()
        }
    };

    let format = match uploads::sniff_format(&image) {
        Ok(format) => format,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: e })).into_response()
        }
    };

    // All validation is done; only now does anything touch disk
    let stored = match uploads::store_post_image(&app.config.uploads_dir, user.id, format, &image)
        .await
    {
        Ok(stored) => stored,
        Err(e) => {
            tracing::error!("Failed to store uploaded image: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create post".to_string(),
                }),
            )
                .into_response();
        }
    };

    let technique_ids = form.techniques.unwrap_or_default();

    let mut conn = match app.pool.get() {
        Ok(c) => c,
        Err(_) => {
            uploads::remove_image(&app.config.uploads_dir, &stored).await;
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Database connection failed".to_string(),
                }),
            )
                .into_response();
        }
    };

    let result: Result<Post, diesel::result::Error> = conn.transaction(|conn| {
        let post: Post = diesel::insert_into(posts::table)
            .values(&NewPost {
                user_id: user.id,
                description: form.description.as_deref(),
                post_picture: &stored,
            })
            .returning(Post::as_returning())
            .get_result(conn)?;

        if !technique_ids.is_empty() {
            let associations: Vec<NewPostTechnique> = technique_ids
                .iter()
                .map(|&technique_id| NewPostTechnique {
                    post_id: post.id,
                    technique_id,
                })
                .collect();

            diesel::insert_into(post_techniques::table)
                .values(&associations)
                .execute(conn)?;
        }

        Ok(post)
    });

    let post = match result {
        Ok(post) => post,
        Err(e) => {
            tracing::error!("Failed to create post: {}", e);
            // The row never landed; don't leave the file behind
            uploads::remove_image(&app.config.uploads_dir, &stored).await;
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create post".to_string(),
                }),
            )
                .into_response();
        }
    };

    let techniques = match technique_names_for_post(&mut conn, post.id) {
        Ok(names) => names,
        Err(e) => {
            tracing::error!("Failed to load techniques for post: {}", e);
            Vec::new()
        }
    };

    (
        StatusCode::CREATED,
        Json(PostWithTechniques::new(post, techniques)),
    )
        .into_response()
}
