//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::PostId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    /// Lookup by id or username failed
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Username already in use")]
    UsernameAlreadyExists,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    /// The role a new account must receive is not present in the store
    #[error("Role does not exist: {0}")]
    InvalidRole(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Collaborator Errors (wrapped)
    // =========================================================================
    #[error("Media upload failed: {0}")]
    MediaUpload(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "USER_NOT_FOUND",
            Self::PostNotFound(_) => "POST_NOT_FOUND",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_EXISTS",
            Self::UsernameAlreadyExists => "USERNAME_EXISTS",

            // Business Rules
            Self::InvalidRole(_) => "INVALID_ROLE",
            Self::AccessDenied(_) => "ACCESS_DENIED",
            Self::ValidationError(_) => "VALIDATION_ERROR",

            // Collaborators
            Self::MediaUpload(_) => "MEDIA_UPLOAD_ERROR",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::PostNotFound(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists | Self::UsernameAlreadyExists)
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::AccessDenied(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }

    /// Check if the error originated in an external collaborator
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            Self::MediaUpload(_)
                | Self::DatabaseError(_)
                | Self::CacheError(_)
                | Self::InternalError(_)
        )
    }
}
