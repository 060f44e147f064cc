//! Production wiring
//!
//! Builds a [`ServiceContext`] backed by PostgreSQL, the configured cache
//! backend and the local media store.

use std::sync::Arc;

use blog_cache::build_cache;
use blog_common::{AppConfig, AppError, Argon2PasswordHasher, RoleBasedPolicy};
use blog_db::{
    create_pool, DatabaseConfig, PgPostRepository, PgRoleRepository, PgTagRepository,
    PgUserRepository,
};
use blog_media::LocalMediaStore;
use tracing::{info, instrument};

use crate::dto::PostResponse;
use crate::services::{ServiceContext, ServiceResult};

/// Cache namespace for single-post responses
pub const POST_CACHE_NAMESPACE: &str = "post";

/// Connect to the store and assemble every collaborator from configuration
///
/// # Errors
/// Fails when the database is unreachable or the cache backend cannot be built
#[instrument(skip(config), fields(app = %config.app.name))]
pub async fn build_context(config: &AppConfig) -> ServiceResult<ServiceContext> {
    let pool = create_pool(&DatabaseConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    let post_cache = build_cache::<PostResponse>(&config.cache, POST_CACHE_NAMESPACE)
        .map_err(|e| AppError::Cache(e.to_string()))?;

    let ctx = ServiceContext::builder()
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .role_repo(Arc::new(PgRoleRepository::new(pool.clone())))
        .tag_repo(Arc::new(PgTagRepository::new(pool.clone())))
        .post_repo(Arc::new(PgPostRepository::new(pool)))
        .media_store(Arc::new(LocalMediaStore::from_config(&config.storage)))
        .password_hasher(Arc::new(Argon2PasswordHasher::new()))
        .access_policy(Arc::new(RoleBasedPolicy::new(&config.accounts.admin_role)))
        .post_cache(post_cache)
        .default_role(&config.accounts.default_role)
        .build()?;

    info!(
        cache = ?config.cache.backend,
        upload_dir = %config.storage.upload_dir,
        "Service context ready"
    );

    Ok(ctx)
}
