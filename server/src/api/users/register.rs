use crate::api::users::UserResponse;
use crate::api::ErrorResponse;
use crate::auth::{hash_password, issue_token};
use crate::get_conn;
use crate::models::{NewUser, NewUserBadge, User};
use crate::schema::{user_badges, users};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Badge granted for completing registration ("Profile Creator").
pub const PROFILE_CREATOR_BADGE_ID: i32 = 1;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub token: String,
    pub user: UserResponse,
}

#[utoipa::path(
    post,
    path = "/api/users/register",
    tag = "users",
    request_body(content = RegisterRequest, example = json!({"name": "Fern", "email": "fern@example.com", "password": "secret"})),
    responses(
        (status = 201, description = "User registered successfully", body = RegisterResponse),
        (status = 400, description = "Missing fields or email already registered", body = ErrorResponse)
    )
)]
pub async fn register(
    State(app): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> impl IntoResponse {
    if req.name.trim().is_empty() || req.email.trim().is_empty() || req.password.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Name, email and password are required".to_string(),
            }),
        )
            .into_response();
    }

    let mut conn = get_conn!(app.pool);

    let password_hash = match hash_password(&req.password) {
        Ok(h) => h,
        Err(e) => {
            tracing::error!("Failed to hash password: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to register user".to_string(),
                }),
            )
                .into_response();
        }
    };

    let new_user = NewUser {
        name: req.name.trim(),
        email: req.email.trim(),
        password: &password_hash,
    };

    // Insert the user and the registration badge atomically; a duplicate
    // email surfaces as a unique violation and writes nothing.
    let result: Result<User, diesel::result::Error> = conn.transaction(|conn| {
        let user: User = diesel::insert_into(users::table)
            .values(&new_user)
            .returning(User::as_returning())
            .get_result(conn)?;

        diesel::insert_into(user_badges::table)
            .values(&NewUserBadge {
                user_id: user.id,
                badge_id: PROFILE_CREATOR_BADGE_ID,
            })
            .execute(conn)?;

        Ok(user)
    });

    let user = match result {
        Ok(u) => u,
        Err(diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::UniqueViolation,
            _,
        )) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Email is already registered".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to register user: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to register user".to_string(),
                }),
            )
                .into_response();
        }
    };

    let token = match issue_token(&app.config.jwt_secret, &user) {
        Ok(t) => t,
        Err(e) => {
            tracing::error!("Failed to issue token: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to register user".to_string(),
                }),
            )
                .into_response();
        }
    };

    (
        StatusCode::CREATED,
        Json(RegisterResponse {
            token,
            user: user.into(),
        }),
    )
        .into_response()
}
