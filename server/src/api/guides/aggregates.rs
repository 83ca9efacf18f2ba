use std::collections::HashMap;

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::PlantGuide;
use crate::schema::{plant_categories, plant_guide_categories};

/// A plant-care guide with its category names folded in.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GuideWithCategories {
    pub id: i32,
    pub common_name: String,
    pub scientific_name: String,
    pub guide_picture: Option<String>,
    pub description: String,
    pub germination: String,
    pub transplanting: String,
    pub harvest: String,
    pub watering: String,
    pub sunlight: String,
    pub extra_care: String,
    pub difficulty: String,
    pub growing_season: String,
    pub days_to_harvest: String,
    pub created_at: DateTime<Utc>,
    pub categories: Vec<String>,
}

pub fn category_names_by_guide(
    conn: &mut PgConnection,
    guide_ids: &[i32],
) -> QueryResult<HashMap<i32, Vec<String>>> {
    let rows: Vec<(i32, String)> = plant_guide_categories::table
        .inner_join(plant_categories::table)
        .filter(plant_guide_categories::plant_guide_id.eq_any(guide_ids))
        .order(plant_categories::name.asc())
        .select((
            plant_guide_categories::plant_guide_id,
            plant_categories::name,
        ))
        .load(conn)?;

    let mut map: HashMap<i32, Vec<String>> = HashMap::new();
    for (guide_id, name) in rows {
        map.entry(guide_id).or_default().push(name);
    }
    Ok(map)
}

pub fn with_categories(
    conn: &mut PgConnection,
    guides: Vec<PlantGuide>,
) -> QueryResult<Vec<GuideWithCategories>> {
    let guide_ids: Vec<i32> = guides.iter().map(|guide| guide.id).collect();
    let mut categories = category_names_by_guide(conn, &guide_ids)?;

    Ok(guides
        .into_iter()
        .map(|guide| GuideWithCategories {
            id: guide.id,
            common_name: guide.common_name,
            scientific_name: guide.scientific_name,
            guide_picture: guide.guide_picture,
            description: guide.description,
            germination: guide.germination,
            transplanting: guide.transplanting,
            harvest: guide.harvest,
            watering: guide.watering,
            sunlight: guide.sunlight,
            extra_care: guide.extra_care,
            difficulty: guide.difficulty,
            growing_season: guide.growing_season,
            days_to_harvest: guide.days_to_harvest,
            created_at: guide.created_at,
            categories: categories.remove(&guide.id).unwrap_or_default(),
        })
        .collect())
}
