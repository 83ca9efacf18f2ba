use crate::api::techniques::TechniqueResponse;
use crate::api::ErrorResponse;
use crate::get_conn;
use crate::models::CultivationTechnique;
use crate::schema::cultivation_techniques;
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
    path = "/api/techniques/{id}",
    tag = "techniques",
    params(
        ("id" = i32, Path, description = "Technique ID")
    ),
    responses(
        (status = 200, description = "Technique details", body = TechniqueResponse),
        (status = 404, description = "Technique not found", body = ErrorResponse)
    )
)]
pub async fn get_technique(State(app): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    let mut conn = get_conn!(app.pool);

    let technique: CultivationTechnique = match cultivation_techniques::table
        .find(id)
        .select(CultivationTechnique::as_select())
        .first(&mut conn)
    {
        Ok(row) => row,
        Err(diesel::NotFound) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Technique not found".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to fetch technique: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch technique".to_string(),
                }),
            )
                .into_response();
        }
    };

    (StatusCode::OK, Json(TechniqueResponse::from(technique))).into_response()
}
