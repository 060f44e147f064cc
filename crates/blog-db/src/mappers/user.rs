//! User / role model -> entity mappers

use std::collections::HashMap;

use blog_core::entities::{Role, User};
use blog_core::value_objects::UserId;
use uuid::Uuid;

use crate::models::{RoleModel, UserModel, UserRoleModel};

impl From<RoleModel> for Role {
    fn from(model: RoleModel) -> Self {
        Role {
            name: model.name,
            description: model.description,
        }
    }
}

impl From<UserRoleModel> for Role {
    fn from(model: UserRoleModel) -> Self {
        Role {
            name: model.name,
            description: model.description,
        }
    }
}

/// Build a User entity from its row and separately loaded roles
pub fn user_with_roles(model: UserModel, roles: Vec<Role>) -> User {
    User {
        id: UserId::from_uuid(model.id),
        username: model.username,
        email: model.email,
        first_name: model.first_name,
        last_name: model.last_name,
        roles,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

/// Bucket role rows by user id
pub fn group_roles(rows: Vec<UserRoleModel>) -> HashMap<Uuid, Vec<Role>> {
    let mut grouped: HashMap<Uuid, Vec<Role>> = HashMap::new();
    for row in rows {
        grouped.entry(row.user_id).or_default().push(Role::from(row));
    }
    grouped
}
