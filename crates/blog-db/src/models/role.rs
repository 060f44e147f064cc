//! Role database models

use sqlx::FromRow;
use uuid::Uuid;

/// Database model for roles table
#[derive(Debug, Clone, FromRow)]
pub struct RoleModel {
    pub name: String,
    pub description: Option<String>,
}

/// Role row joined through user_roles, used to batch-load roles for many users
#[derive(Debug, Clone, FromRow)]
pub struct UserRoleModel {
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
}
