use crate::api::guides::aggregates::{with_categories, GuideWithCategories};
use crate::api::ErrorResponse;
use crate::get_conn;
use crate::models::PlantGuide;
use crate::schema::plant_guides;
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
    path = "/api/guides/{id}",
    tag = "guides",
    params(
        ("id" = i32, Path, description = "Guide ID")
    ),
    responses(
        (status = 200, description = "Guide details", body = GuideWithCategories),
        (status = 404, description = "Guide not found", body = ErrorResponse)
    )
)]
pub async fn get_guide(State(app): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    let mut conn = get_conn!(app.pool);

    let guide: PlantGuide = match plant_guides::table
        .find(id)
        .select(PlantGuide::as_select())
        .first(&mut conn)
    {
        Ok(row) => row,
        Err(diesel::NotFound) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Guide not found".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to fetch guide: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch guide".to_string(),
                }),
            )
                .into_response();
        }
    };

    let result = match with_categories(&mut conn, vec![guide]) {
        Ok(mut result) => result.remove(0),
        Err(e) => {
            tracing::error!("Failed to fetch guide categories: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch guide".to_string(),
                }),
            )
                .into_response();
        }
    };

    (StatusCode::OK, Json(result)).into_response()
}
