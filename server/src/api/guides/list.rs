use crate::api::guides::aggregates::{with_categories, GuideWithCategories};
use crate::api::ErrorResponse;
use crate::get_conn;
use crate::models::PlantGuide;
use crate::schema::{plant_guide_categories, plant_guides};
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
pub struct ListGuidesParams {
    /// Only guides in this category
    pub category_id: Option<i32>,
    /// Case-insensitive substring match on common or scientific name
    pub search: Option<String>,
}

fn escape_like(term: &str) -> String {
    term.replace('%', "\\%").replace('_', "\\_")
}

#[utoipa::path(
    get,
    path = "/api/guides",
    tag = "guides",
    params(ListGuidesParams),
    responses(
        (status = 200, description = "Plant guides ordered by common name", body = [GuideWithCategories])
    )
)]
pub async fn list_guides(
    State(app): State<AppState>,
    Query(params): Query<ListGuidesParams>,
) -> impl IntoResponse {
    let mut conn = get_conn!(app.pool);

    let mut query = plant_guides::table.into_boxed();

    if let Some(category_id) = params.category_id {
        query = query.filter(exists(
            plant_guide_categories::table
                .filter(plant_guide_categories::plant_guide_id.eq(plant_guides::id))
                .filter(plant_guide_categories::plant_category_id.eq(category_id)),
        ));
    }

    if let Some(ref search) = params.search {
        let pattern = format!("%{}%", escape_like(search));
        query = query.filter(
            plant_guides::common_name
                .ilike(pattern.clone())
                .or(plant_guides::scientific_name.ilike(pattern)),
        );
    }

    let guides: Vec<PlantGuide> = match query
        .order(plant_guides::common_name.asc())
        .select(PlantGuide::as_select())
        .load(&mut conn)
    {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("Failed to fetch guides: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch guides".to_string(),
                }),
            )
                .into_response();
        }
    };

    let result = match with_categories(&mut conn, guides) {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Failed to fetch guide categories: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch guides".to_string(),
                }),
            )
                .into_response();
        }
    };

    (StatusCode::OK, Json(result)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_like_wildcards() {
        assert_eq!(escape_like("100% basil"), "100\\% basil");
        assert_eq!(escape_like("snake_plant"), "snake\\_plant");
        assert_eq!(escape_like("plain"), "plain");
    }
}
