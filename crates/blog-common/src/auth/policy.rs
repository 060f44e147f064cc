//! Access policies consulted by the services

use blog_core::error::DomainError;
use blog_core::traits::{AccessPolicy, Action};
use blog_core::Principal;

/// Grants every action to every principal
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAllPolicy;

impl AccessPolicy for AllowAllPolicy {
    fn check(&self, _principal: &Principal, _action: Action) -> Result<(), DomainError> {
        Ok(())
    }
}

/// Requires an administrative role for privileged actions
#[derive(Debug, Clone)]
pub struct RoleBasedPolicy {
    admin_role: String,
}

impl RoleBasedPolicy {
    pub fn new(admin_role: impl Into<String>) -> Self {
        Self {
            admin_role: admin_role.into(),
        }
    }

    pub fn admin_role(&self) -> &str {
        &self.admin_role
    }
}

impl AccessPolicy for RoleBasedPolicy {
    fn check(&self, principal: &Principal, action: Action) -> Result<(), DomainError> {
        match action {
            Action::ListUsers if principal.has_role(&self.admin_role) => Ok(()),
            Action::ListUsers => {
                tracing::warn!(
                    username = %principal.username,
                    action = action.as_str(),
                    "Access denied"
                );
                Err(DomainError::AccessDenied(format!(
                    "{} requires {}",
                    action.as_str(),
                    self.admin_role
                )))
            }
        }
    }
}
