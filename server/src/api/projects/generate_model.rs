use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::get_conn;
use crate::schema::{cultivation_techniques, projects};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use serde::Deserialize;
use utoipa::ToSchema;

/// The models are pre-made, one per cultivation technique. Anything outside
/// the fixed vocabulary gets the default file, which is not shipped, so the
/// request 404s.
fn model_file_for(technique: &str) -> &'static str {
    match technique {
        "Vertical" => "vertical-garden.glb",
        "Wall-mounted" => "wall-planter.glb",
        "Hydroponics" => "hydroponic.glb",
        "Recycled Materials" => "recycled.glb",
        "Aquaponics" => "aquaponic.glb",
        _ => "default.glb",
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GenerateModelRequest {
    pub technique_id: i32,
    // Dimensions come along from the project form but the models are static
    pub width: Option<f64>,
    pub length: Option<f64>,
    pub height: Option<f64>,
}

#[utoipa::path(
    post,
    path = "/api/projects/{id}/generate-model",
    tag = "projects",
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    request_body = GenerateModelRequest,
    responses(
        (status = 200, description = "The 3D model file", body = Vec<u8>, content_type = "model/gltf-binary"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Project, technique or model file not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn generate_model(
    AuthUser(user): AuthUser,
    State(app): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<GenerateModelRequest>,
) -> impl IntoResponse {
    let mut conn = get_conn!(app.pool);

    // Ownership check; a foreign project is indistinguishable from a missing one
    let owned = match projects::table
        .filter(projects::id.eq(id))
        .filter(projects::user_id.eq(user.id))
        .select(projects::id)
        .first::<i32>(&mut conn)
    {
        Ok(_) => true,
        Err(diesel::NotFound) => false,
        Err(e) => {
            tracing::error!("Failed to check project: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to generate model".to_string(),
                }),
            )
                .into_response();
        }
    };

    if !owned {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Project not found".to_string(),
            }),
        )
            .into_response();
    }

    let technique: String = match cultivation_techniques::table
        .find(req.technique_id)
        .select(cultivation_techniques::name)
        .first(&mut conn)
    {
        Ok(name) => name,
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
                    error: "Failed to generate model".to_string(),
                }),
            )
                .into_response();
        }
    };

    let model_file = model_file_for(&technique);
    let model_path = app.config.models_dir.join(model_file);

    let data = match tokio::fs::read(&model_path).await {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!(path = %model_path.display(), "Model file not readable: {}", e);
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Model file not found".to_string(),
                }),
            )
                .into_response();
        }
    };

    // Remember which model this project resolved to; losing this is harmless
    if let Err(e) = diesel::update(projects::table.find(id))
        .set(projects::model_file.eq(model_file))
        .execute(&mut conn)
    {
        tracing::warn!("Failed to record model file on project: {}", e);
    }

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "model/gltf-binary".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", model_file),
            ),
        ],
        data,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_the_fixed_vocabulary() {
        assert_eq!(model_file_for("Vertical"), "vertical-garden.glb");
        assert_eq!(model_file_for("Wall-mounted"), "wall-planter.glb");
        assert_eq!(model_file_for("Hydroponics"), "hydroponic.glb");
        assert_eq!(model_file_for("Recycled Materials"), "recycled.glb");
        assert_eq!(model_file_for("Aquaponics"), "aquaponic.glb");
    }

    #[test]
    fn unknown_technique_falls_back_to_default() {
        assert_eq!(model_file_for("Permaculture"), "default.glb");
        assert_eq!(model_file_for(""), "default.glb");
        // Case matters; the vocabulary is stored capitalized
        assert_eq!(model_file_for("hydroponics"), "default.glb");
    }
}
