use crate::api::techniques::TechniqueResponse;
use crate::api::ErrorResponse;
use crate::get_conn;
use crate::models::CultivationTechnique;
use crate::schema::cultivation_techniques;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;

#[utoipa::path(
    get,
    path = "/api/techniques",
    tag = "techniques",
    responses(
        (status = 200, description = "All cultivation techniques", body = [TechniqueResponse])
    )
)]
pub async fn list_techniques(State(app): State<AppState>) -> impl IntoResponse {
    let mut conn = get_conn!(app.pool);

    let techniques: Vec<CultivationTechnique> = match cultivation_techniques::table
        .order(cultivation_techniques::name.asc())
        .select(CultivationTechnique::as_select())
        .load(&mut conn)
    {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("Failed to fetch techniques: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch techniques".to_string(),
                }),
            )
                .into_response();
        }
    };

    let result: Vec<TechniqueResponse> = techniques.into_iter().map(Into::into).collect();
    (StatusCode::OK, Json(result)).into_response()
}
