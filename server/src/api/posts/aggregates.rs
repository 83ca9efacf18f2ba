//! Response shapes for posts and the batched lookups that fill them in.
//!
//! The feed joins three things onto every post: its author, its technique
//! names, and its comments with their authors. Techniques and comments are
//! loaded in one query each for the whole page of posts, keyed by post id.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Post;
use crate::schema::{comments, cultivation_techniques, post_techniques, users};

#[derive(Debug, Clone, Queryable, Serialize, ToSchema)]
pub struct Author {
    pub id: i32,
    pub name: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CommentWithAuthor {
    pub id: i32,
    pub content: String,
    pub comment_date: DateTime<Utc>,
    pub user: Author,
}

/// A feed entry: the post row plus everything joined onto it.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PostDetail {
    pub id: i32,
    pub description: Option<String>,
    pub post_picture: String,
    pub post_date: DateTime<Utc>,
    pub likes: i32,
    pub is_published: bool,
    pub user: Author,
    pub techniques: Vec<String>,
    pub comments: Vec<CommentWithAuthor>,
}

/// Response for create/update, where comments are not included.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PostWithTechniques {
    pub id: i32,
    pub user_id: i32,
    pub description: Option<String>,
    pub post_picture: String,
    pub post_date: DateTime<Utc>,
    pub likes: i32,
    pub is_published: bool,
    pub techniques: Vec<String>,
}

impl PostWithTechniques {
    pub fn new(post: Post, techniques: Vec<String>) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            description: post.description,
            post_picture: post.post_picture,
            post_date: post.post_date,
            likes: post.likes,
            is_published: post.is_published,
            techniques,
        }
    }
}

pub fn technique_names_by_post(
    conn: &mut PgConnection,
    post_ids: &[i32],
) -> QueryResult<HashMap<i32, Vec<String>>> {
    let rows: Vec<(i32, String)> = post_techniques::table
        .inner_join(cultivation_techniques::table)
        .filter(post_techniques::post_id.eq_any(post_ids))
        .order(cultivation_techniques::name.asc())
        .select((post_techniques::post_id, cultivation_techniques::name))
        .load(conn)?;

    let mut map: HashMap<i32, Vec<String>> = HashMap::new();
    for (post_id, name) in rows {
        map.entry(post_id).or_default().push(name);
    }
    Ok(map)
}

pub fn technique_names_for_post(conn: &mut PgConnection, post_id: i32) -> QueryResult<Vec<String>> {
    Ok(technique_names_by_post(conn, &[post_id])?
        .remove(&post_id)
        .unwrap_or_default())
}

pub fn comments_by_post(
    conn: &mut PgConnection,
    post_ids: &[i32],
) -> QueryResult<HashMap<i32, Vec<CommentWithAuthor>>> {
    let rows: Vec<(i32, i32, String, DateTime<Utc>, Author)> = comments::table
        .inner_join(users::table)
        .filter(comments::post_id.eq_any(post_ids))
        .order(comments::comment_date.asc())
        .select((
            comments::id,
            comments::post_id,
            comments::content,
            comments::comment_date,
            (users::id, users::name, users::profile_picture),
        ))
        .load(conn)?;

    let mut map: HashMap<i32, Vec<CommentWithAuthor>> = HashMap::new();
    for (id, post_id, content, comment_date, user) in rows {
        map.entry(post_id).or_default().push(CommentWithAuthor {
            id,
            content,
            comment_date,
            user,
        });
    }
    Ok(map)
}

/// Turn (post, author) rows into full feed entries, preserving order.
pub fn load_post_details(
    conn: &mut PgConnection,
    rows: Vec<(Post, Author)>,
) -> QueryResult<Vec<PostDetail>> {
    let post_ids: Vec<i32> = rows.iter().map(|(post, _)| post.id).collect();
    let mut techniques = technique_names_by_post(conn, &post_ids)?;
    let mut comments = comments_by_post(conn, &post_ids)?;

    Ok(rows
        .into_iter()
        .map(|(post, user)| PostDetail {
            id: post.id,
            description: post.description,
            post_picture: post.post_picture,
            post_date: post.post_date,
            likes: post.likes,
            is_published: post.is_published,
            user,
            techniques: techniques.remove(&post.id).unwrap_or_default(),
            comments: comments.remove(&post.id).unwrap_or_default(),
        })
        .collect())
}
