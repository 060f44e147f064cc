//! Authenticated principal reference
//!
//! Produced by the (external) authentication layer. Services only read the
//! username to resolve the acting user; roles are consulted by access policies.

use serde::{Deserialize, Serialize};

/// The identity a request is executed as
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub username: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Principal {
    /// Create a principal without any granted roles
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            roles: Vec::new(),
        }
    }

    /// Add a granted role name
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.push(role.into());
        self
    }

    /// Username the principal authenticated as
    #[inline]
    pub fn name(&self) -> &str {
        &self.username
    }

    /// Check whether the principal was granted a role
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}
