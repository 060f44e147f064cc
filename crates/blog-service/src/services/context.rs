//! Service context - dependency container for services
//!
//! Every collaborator is held behind a trait object so production wiring
//! (PostgreSQL, moka/Redis, local disk) and test fakes are interchangeable.

use std::sync::Arc;

use blog_cache::ResponseCache;
use blog_common::{Argon2PasswordHasher, RoleBasedPolicy};
use blog_core::entities::Role;
use blog_core::traits::{
    AccessPolicy, MediaStore, PasswordHasher, PostRepository, RoleRepository, TagRepository,
    UserRepository,
};

use crate::dto::PostResponse;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    role_repo: Arc<dyn RoleRepository>,
    tag_repo: Arc<dyn TagRepository>,
    post_repo: Arc<dyn PostRepository>,

    // Collaborators
    media_store: Arc<dyn MediaStore>,
    password_hasher: Arc<dyn PasswordHasher>,
    access_policy: Arc<dyn AccessPolicy>,

    // Cache
    post_cache: Arc<dyn ResponseCache<PostResponse>>,

    // Account rules
    default_role: String,
}

impl ServiceContext {
    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the role repository
    pub fn role_repo(&self) -> &dyn RoleRepository {
        self.role_repo.as_ref()
    }

    /// Get the tag repository
    pub fn tag_repo(&self) -> &dyn TagRepository {
        self.tag_repo.as_ref()
    }

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    // === Collaborators ===

    /// Get the media store
    pub fn media_store(&self) -> &dyn MediaStore {
        self.media_store.as_ref()
    }

    /// Get the password hasher
    pub fn password_hasher(&self) -> &dyn PasswordHasher {
        self.password_hasher.as_ref()
    }

    /// Get the access policy
    pub fn access_policy(&self) -> &dyn AccessPolicy {
        self.access_policy.as_ref()
    }

    // === Cache ===

    /// Get the single-post response cache
    pub fn post_cache(&self) -> &dyn ResponseCache<PostResponse> {
        self.post_cache.as_ref()
    }

    // === Account rules ===

    /// Name of the role every new account receives
    pub fn default_role(&self) -> &str {
        &self.default_role
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("collaborators", &"...")
            .field("default_role", &self.default_role)
            .finish()
    }
}

/// Builder for creating ServiceContext.
///
/// Repositories, the media store and the post cache are required. The hasher
/// defaults to Argon2id, the policy to admin-only listing, and the default
/// role to `ROLE_USER`.
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    role_repo: Option<Arc<dyn RoleRepository>>,
    tag_repo: Option<Arc<dyn TagRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    media_store: Option<Arc<dyn MediaStore>>,
    password_hasher: Option<Arc<dyn PasswordHasher>>,
    access_policy: Option<Arc<dyn AccessPolicy>>,
    post_cache: Option<Arc<dyn ResponseCache<PostResponse>>>,
    default_role: Option<String>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            user_repo: None,
            role_repo: None,
            tag_repo: None,
            post_repo: None,
            media_store: None,
            password_hasher: None,
            access_policy: None,
            post_cache: None,
            default_role: None,
        }
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn role_repo(mut self, repo: Arc<dyn RoleRepository>) -> Self {
        self.role_repo = Some(repo);
        self
    }

    pub fn tag_repo(mut self, repo: Arc<dyn TagRepository>) -> Self {
        self.tag_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn media_store(mut self, store: Arc<dyn MediaStore>) -> Self {
        self.media_store = Some(store);
        self
    }

    pub fn password_hasher(mut self, hasher: Arc<dyn PasswordHasher>) -> Self {
        self.password_hasher = Some(hasher);
        self
    }

    pub fn access_policy(mut self, policy: Arc<dyn AccessPolicy>) -> Self {
        self.access_policy = Some(policy);
        self
    }

    pub fn post_cache(mut self, cache: Arc<dyn ResponseCache<PostResponse>>) -> Self {
        self.post_cache = Some(cache);
        self
    }

    pub fn default_role(mut self, role: impl Into<String>) -> Self {
        self.default_role = Some(role.into());
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            user_repo: self
                .user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            role_repo: self
                .role_repo
                .ok_or_else(|| ServiceError::validation("role_repo is required"))?,
            tag_repo: self
                .tag_repo
                .ok_or_else(|| ServiceError::validation("tag_repo is required"))?,
            post_repo: self
                .post_repo
                .ok_or_else(|| ServiceError::validation("post_repo is required"))?,
            media_store: self
                .media_store
                .ok_or_else(|| ServiceError::validation("media_store is required"))?,
            post_cache: self
                .post_cache
                .ok_or_else(|| ServiceError::validation("post_cache is required"))?,
            password_hasher: self
                .password_hasher
                .unwrap_or_else(|| Arc::new(Argon2PasswordHasher::new())),
            access_policy: self
                .access_policy
                .unwrap_or_else(|| Arc::new(RoleBasedPolicy::new(Role::ADMIN))),
            default_role: self.default_role.unwrap_or_else(|| Role::USER.to_string()),
        })
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
