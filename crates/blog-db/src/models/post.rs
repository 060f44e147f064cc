//! Post database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Post row joined with the author's username
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub username: String,
    pub title: String,
    pub body: String,
    pub kind: String,
    pub created_at: DateTime<Utc>,
}

/// Tag row joined through post_tags
#[derive(Debug, Clone, FromRow)]
pub struct PostTagModel {
    pub post_id: Uuid,
    pub tag_id: Uuid,
    pub name: String,
}
