//! Tag database model

use sqlx::FromRow;
use uuid::Uuid;

/// Database model for tags table
#[derive(Debug, Clone, FromRow)]
pub struct TagModel {
    pub id: Uuid,
    pub name: String,
}
