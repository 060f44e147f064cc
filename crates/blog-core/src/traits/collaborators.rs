//! Non-persistence collaborators consumed by the services

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::traits::RepoResult;
use crate::value_objects::Principal;

// ============================================================================
// Media Store
// ============================================================================

/// Result of a successful upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedMedia {
    /// Durable URL the media can be fetched from
    pub url: String,
}

/// Binary media storage. Failures surface as `DomainError::MediaUpload`.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Store an image and return its durable URL
    async fn upload_image(&self, bytes: Vec<u8>) -> RepoResult<UploadedMedia>;

    /// Store a video and return its durable URL
    async fn upload_video(&self, bytes: Vec<u8>) -> RepoResult<UploadedMedia>;
}

// ============================================================================
// Password Hasher
// ============================================================================

/// One-way password hashing
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password
    fn hash(&self, password: &str) -> Result<String, DomainError>;
}

// ============================================================================
// Access Policy
// ============================================================================

/// Operations guarded by an access policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Read every user account
    ListUsers,
}

impl Action {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ListUsers => "LIST_USERS",
        }
    }
}

/// Decides whether a principal may perform an action
pub trait AccessPolicy: Send + Sync {
    /// Returns `DomainError::AccessDenied` when the principal is not allowed
    fn check(&self, principal: &Principal, action: Action) -> Result<(), DomainError>;
}
