//! User service
//!
//! Account creation with uniqueness checks and default-role assignment,
//! lookups, partial updates and deletion.

use blog_core::entities::User;
use blog_core::error::DomainError;
use blog_core::traits::Action;
use blog_core::value_objects::{Principal, UserId};
use tracing::{debug, info, instrument, warn};

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create an account.
    ///
    /// Email uniqueness is checked before username uniqueness; either
    /// violation aborts before anything is written.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn create_user(&self, request: CreateUserRequest) -> ServiceResult<UserResponse> {
        let users = self.ctx.user_repo();

        if users.exists_by_email(&request.email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }
        if users.exists_by_username(&request.username).await? {
            return Err(DomainError::UsernameAlreadyExists.into());
        }

        let default_role = self.ctx.default_role();
        let role = self
            .ctx
            .role_repo()
            .find_by_name(default_role)
            .await?
            .ok_or_else(|| DomainError::InvalidRole(default_role.to_string()))?;

        let password_hash = self.ctx.password_hasher().hash(&request.password)?;

        let mut user = User::new(UserId::generate(), request.username, request.email);
        user.first_name = request.first_name;
        user.last_name = request.last_name;
        user.assign_role(role);

        users.create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User created");

        Ok(UserResponse::from(&user))
    }

    /// List every account; the access policy decides who may ask
    #[instrument(skip(self, principal), fields(principal = %principal.username))]
    pub async fn get_all(&self, principal: &Principal) -> ServiceResult<Vec<UserResponse>> {
        self.ctx.access_policy().check(principal, Action::ListUsers)?;

        let users = self.ctx.user_repo().find_all().await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// Get a user by ID
    #[instrument(skip(self))]
    pub async fn find_user_by_id(&self, user_id: UserId) -> ServiceResult<UserResponse> {
        let user = self.load(user_id).await?;
        Ok(UserResponse::from(&user))
    }

    /// Overwrite the fields present in the request. The username never changes.
    #[instrument(skip(self, request))]
    pub async fn user_update(
        &self,
        user_id: UserId,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        let mut user = self.load(user_id).await?;
        if request.is_empty() {
            debug!(user_id = %user_id, "Empty update, nothing to write");
            return Ok(UserResponse::from(&user));
        }

        if let Some(email) = request.email {
            user.set_email(email);
        }
        if let Some(first_name) = request.first_name {
            user.set_first_name(first_name);
        }
        if let Some(last_name) = request.last_name {
            user.set_last_name(last_name);
        }

        let password_hash = request
            .password
            .as_deref()
            .map(|p| self.ctx.password_hasher().hash(p))
            .transpose()?;
        if password_hash.is_some() {
            user.touch();
        }

        self.ctx
            .user_repo()
            .update(&user, password_hash.as_deref())
            .await?;

        info!(user_id = %user_id, "User updated");

        // Return what the store now holds
        let refreshed = self.load(user_id).await?;
        Ok(UserResponse::from(&refreshed))
    }

    /// Delete a user and their posts, dropping the posts' cache entries.
    /// Unknown IDs are not an error.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: UserId) -> ServiceResult<()> {
        let removed = self.ctx.user_repo().delete(user_id).await?;

        let cache = self.ctx.post_cache();
        for post_id in &removed {
            if let Err(e) = cache.invalidate(&post_id.to_string()).await {
                warn!(post_id = %post_id, error = %e, "Post cache invalidation failed");
            }
        }

        info!(user_id = %user_id, posts = removed.len(), "User deleted");
        Ok(())
    }

    async fn load(&self, user_id: UserId) -> ServiceResult<User> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(user_id.to_string()))?;
        Ok(user)
    }
}
