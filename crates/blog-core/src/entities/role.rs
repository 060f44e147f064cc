//! Role entity - a named authority granted to users

/// Role entity. Roles are rows in the store, looked up by name; a role that
/// has not been seeded cannot be assigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Role {
    pub name: String,
    pub description: Option<String>,
}

impl Role {
    /// Role every new account receives
    pub const USER: &'static str = "ROLE_USER";

    /// Role allowed to list all accounts
    pub const ADMIN: &'static str = "ROLE_ADMIN";

    /// Create a new Role
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Attach a description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Authority name without the `ROLE_` prefix (e.g. `ADMIN`)
    pub fn authority(&self) -> &str {
        self.name.strip_prefix("ROLE_").unwrap_or(&self.name)
    }
}
