use crate::api::ErrorResponse;
use crate::get_conn;
use crate::models::PlantCategory;
use crate::schema::plant_categories;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryResponse {
    pub id: i32,
    pub name: String,
}

#[utoipa::path(
    get,
    path = "/api/guides/categories",
    tag = "guides",
    responses(
        (status = 200, description = "All plant categories", body = [CategoryResponse])
    )
)]
pub async fn list_categories(State(app): State<AppState>) -> impl IntoResponse {
    let mut conn = get_conn!(app.pool);

    let categories: Vec<PlantCategory> = match plant_categories::table
        .order(plant_categories::name.asc())
        .select(PlantCategory::as_select())
        .load(&mut conn)
    {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("Failed to fetch categories: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch categories".to_string(),
                }),
            )
                .into_response();
        }
    };

    let result: Vec<CategoryResponse> = categories
        .into_iter()
        .map(|category| CategoryResponse {
            id: category.id,
            name: category.name,
        })
        .collect();

    (StatusCode::OK, Json(result)).into_response()
}
