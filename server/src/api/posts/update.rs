use crate::api::posts::aggregates::{technique_names_for_post, PostWithTechniques};
use crate::api::posts::form::parse_post_form;
use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::models::{NewPostTechnique, Post, PostChanges};
use crate::schema::{post_techniques, posts};
use crate::uploads;
use crate::AppState;
use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use utoipa::ToSchema;

#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UpdatePostRequest {
    #[schema(value_type = Option<String>, format = Binary)]
    pub post_picture: Option<Vec<u8>>,
    pub description: Option<String>,
    pub is_published: Option<bool>,
    /// JSON-encoded array of technique ids; replaces the current set
    pub techniques: Option<String>,
}

#[utoipa::path(
    put,
    path = "/api/posts/{id}",
    tag = "posts",
    params(
        ("id" = i32, Path, description = "Post ID")
    ),
    request_body(content_type = "multipart/form-data", content = UpdatePostRequest),
    responses(
        (status = 200, description = "Post updated successfully", body = PostWithTechniques),
        (status = 400, description = "Nothing to update or invalid fields", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_post(
    AuthUser(user): AuthUser,
    State(app): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> impl IntoResponse {
    let form = match parse_post_form(multipart).await {
        Ok(form) => form,
        Err((status, error)) => return (status, Json(ErrorResponse { error })).into_response(),
    };

    let mut conn = match app.pool.get() {
        Ok(c) => c,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Database connection failed".to_string(),
                }),
            )
                .into_response()
        }
    };

    // Ownership check; a foreign post is indistinguishable from a missing one
    let existing: Post = match posts::table
        .filter(posts::id.eq(id))
        .filter(posts::user_id.eq(user.id))
        .select(Post::as_select())
        .first(&mut conn)
    {
        Ok(post) => post,
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
                    error: "Failed to update post".to_string(),
                }),
            )
                .into_response();
        }
    };

    // Validate and store a replacement image before touching the database
    let new_picture = match form.image {
        Some(image) => {
            let format = match uploads::sniff_format(&image) {
                Ok(format) => format,
                Err(e) => {
                    return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: e }))
                        .into_response()
                }
            };
            match uploads::store_post_image(&app.config.uploads_dir, user.id, format, &image).await
            {
                Ok(stored) => Some(stored),
                Err(e) => {
                    tracing::error!("Failed to store uploaded image: {}", e);
                    return (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(ErrorResponse {
                            error: "Failed to update post".to_string(),
                        }),
                    )
                        .into_response();
                }
            }
        }
        None => None,
    };

    let changes = PostChanges {
        description: form.description,
        is_published: form.is_published,
        post_picture: new_picture.clone(),
    };

    if changes.is_empty() && form.techniques.is_none() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No data to update".to_string(),
            }),
        )
            .into_response();
    }

    let result: Result<(), diesel::result::Error> = conn.transaction(|conn| {
        if !changes.is_empty() {
            diesel::update(posts::table.find(id))
                .set(&changes)
                .execute(conn)?;
        }

        // A supplied technique list replaces the associations wholesale
        if let Some(ref technique_ids) = form.techniques {
            diesel::delete(post_techniques::table.filter(post_techniques::post_id.eq(id)))
                .execute(conn)?;

            if !technique_ids.is_empty() {
                let associations: Vec<NewPostTechnique> = technique_ids
                    .iter()
                    .map(|&technique_id| NewPostTechnique {
                        post_id: id,
                        technique_id,
                    })
                    .collect();

                diesel::insert_into(post_techniques::table)
                    .values(&associations)
                    .execute(conn)?;
            }
        }

        Ok(())
    });

    if let Err(e) = result {
        tracing::error!("Failed to update post: {}", e);
        if let Some(ref stored) = new_picture {
            uploads::remove_image(&app.config.uploads_dir, stored).await;
        }
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to update post".to_string(),
            }),
        )
            .into_response();
    }

    // The old image is only orphaned once the new path is committed
    if new_picture.is_some() {
        uploads::remove_image(&app.config.uploads_dir, &existing.post_picture).await;
    }

    let updated: Post = match posts::table
        .find(id)
        .select(Post::as_select())
        .first(&mut conn)
    {
        Ok(post) => post,
        Err(e) => {
            tracing::error!("Failed to fetch updated post: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to update post".to_string(),
                }),
            )
                .into_response();
        }
    };

    let techniques = match technique_names_for_post(&mut conn, id) {
        Ok(names) => names,
        Err(e) => {
            tracing::error!("Failed to load techniques for post: {}", e);
            Vec::new()
        }
    };

    (
        StatusCode::OK,
        Json(PostWithTechniques::new(updated, techniques)),
    )
        .into_response()
}
