use chrono::{DateTime, Utc};
use diesel::prelude::*;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
    pub profile_picture: Option<String>,
    pub registration_date: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::posts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Post {
    pub id: i32,
    pub user_id: i32,
    pub description: Option<String>,
    pub post_picture: String,
    pub post_date: DateTime<Utc>,
    pub likes: i32,
    pub is_published: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::posts)]
pub struct NewPost<'a> {
    pub user_id: i32,
    pub description: Option<&'a str>,
    pub post_picture: &'a str,
}

/// Partial update for a post. `None` fields are left out of the SET clause.
#[derive(AsChangeset, Default, Debug)]
#[diesel(table_name = crate::schema::posts)]
pub struct PostChanges {
    pub description: Option<String>,
    pub is_published: Option<bool>,
    pub post_picture: Option<String>,
}

impl PostChanges {
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.is_published.is_none() && self.post_picture.is_none()
    }
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct Comment {
    pub id: i32,
    pub post_id: i32,
    pub user_id: i32,
    pub content: String,
    pub comment_date: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::comments)]
pub struct NewComment<'a> {
    pub post_id: i32,
    pub user_id: i32,
    pub content: &'a str,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::cultivation_techniques)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CultivationTechnique {
    pub id: i32,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::post_techniques)]
pub struct NewPostTechnique {
    pub post_id: i32,
    pub technique_id: i32,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::plant_guides)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PlantGuide {
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
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::plant_categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PlantCategory {
    pub id: i32,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::user_badges)]
pub struct NewUserBadge {
    pub user_id: i32,
    pub badge_id: i32,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Project {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub width: f64,
    pub length: f64,
    pub height: f64,
    pub location: String,
    pub city: String,
    pub description: String,
    pub technique_id: i32,
    pub model_file: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::projects)]
pub struct NewProject<'a> {
    pub user_id: i32,
    pub name: &'a str,
    pub width: f64,
    pub length: f64,
    pub height: f64,
    pub location: &'a str,
    pub city: &'a str,
    pub description: &'a str,
    pub technique_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_changeset_is_detected() {
        assert!(PostChanges::default().is_empty());
    }

    #[test]
    fn any_field_makes_changeset_non_empty() {
        let changes = PostChanges {
            is_published: Some(false),
            ..Default::default()
        };
        assert!(!changes.is_empty());
    }
}
