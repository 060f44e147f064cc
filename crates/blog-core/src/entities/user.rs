//! User entity - represents a blog account

use chrono::{DateTime, Utc};

use crate::entities::{now, Role};
use crate::value_objects::UserId;

/// User account. The password hash never lives on the entity; it is only
/// handed to the store on create/update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub roles: Vec<Role>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields and no roles
    pub fn new(id: UserId, username: String, email: String) -> Self {
        let created = now();
        Self {
            id,
            username,
            email,
            first_name: None,
            last_name: None,
            roles: Vec::new(),
            created_at: created,
            updated_at: created,
        }
    }

    /// Assign a role; assigning the same role name twice is a no-op
    pub fn assign_role(&mut self, role: Role) {
        if !self.has_role(&role.name) {
            self.roles.push(role);
        }
    }

    /// Check if the user holds a role by name
    pub fn has_role(&self, name: &str) -> bool {
        self.roles.iter().any(|r| r.name == name)
    }

    /// Names of all assigned roles
    pub fn role_names(&self) -> Vec<String> {
        self.roles.iter().map(|r| r.name.clone()).collect()
    }

    /// Update the email
    pub fn set_email(&mut self, email: String) {
        self.email = email;
        self.updated_at = now();
    }

    /// Update the first name
    pub fn set_first_name(&mut self, first_name: String) {
        self.first_name = Some(first_name);
        self.updated_at = now();
    }

    /// Update the last name
    pub fn set_last_name(&mut self, last_name: String) {
        self.last_name = Some(last_name);
        self.updated_at = now();
    }

    /// Mark the record as modified without changing a profile field
    pub fn touch(&mut self) {
        self.updated_at = now();
    }
}
