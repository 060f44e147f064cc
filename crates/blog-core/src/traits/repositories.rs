//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every multi-row write (a user with its role
//! assignments, a post with its tag links) is a single call so the store can
//! commit it as one transaction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{Post, Role, Tag, User};
use crate::error::DomainError;
use crate::value_objects::{PostId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user (with roles) by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user (with roles) by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn exists_by_email(&self, email: &str) -> RepoResult<bool>;

    /// Check if username is already taken
    async fn exists_by_username(&self, username: &str) -> RepoResult<bool>;

    /// List every user
    async fn find_all(&self) -> RepoResult<Vec<User>>;

    /// Insert a user together with its role assignments, atomically
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Overwrite the mutable profile fields, and the password hash when given
    async fn update(&self, user: &User, password_hash: Option<&str>) -> RepoResult<()>;

    /// Delete by ID together with the user's posts, returning the ids of
    /// the posts removed. Deleting an unknown ID is not an error.
    async fn delete(&self, id: UserId) -> RepoResult<Vec<PostId>>;
}

// ============================================================================
// Role Repository
// ============================================================================

#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Find role by its unique name
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Role>>;

    /// Insert the role if no role with that name exists
    async fn create(&self, role: &Role) -> RepoResult<()>;
}

// ============================================================================
// Tag Repository
// ============================================================================

#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Return the tags whose names are in `names`. Unknown names are simply
    /// absent from the result.
    async fn find_all_by_name_in(&self, names: &[String]) -> RepoResult<Vec<Tag>>;

    /// Insert the tag if no tag with that name exists
    async fn create(&self, tag: &Tag) -> RepoResult<()>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post (with author and tags) by ID
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>>;

    /// Insert a post together with its tag links, atomically
    async fn create(&self, post: &Post) -> RepoResult<()>;

    /// Delete by ID. Deleting an unknown ID is not an error.
    async fn delete(&self, id: PostId) -> RepoResult<()>;

    /// Posts created at or after `since`, oldest first (ties broken by id)
    async fn find_created_since(&self, since: DateTime<Utc>) -> RepoResult<Vec<Post>>;
}
