//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use blog_core::entities::{Role, User};
use blog_core::traits::{RepoResult, UserRepository};
use blog_core::value_objects::{PostId, UserId};

use crate::mappers::{group_roles, user_with_roles};
use crate::models::{UserModel, UserRoleModel};

use super::error::{map_db_error, map_unique_violation, user_conflict};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load the roles of every listed user in one round trip
    async fn load_roles(&self, user_ids: &[Uuid]) -> RepoResult<Vec<UserRoleModel>> {
        sqlx::query_as::<_, UserRoleModel>(
            r"
            SELECT ur.user_id, r.name, r.description
            FROM user_roles ur
            JOIN roles r ON r.name = ur.role_name
            WHERE ur.user_id = ANY($1)
            ORDER BY r.name
            ",
        )
        .bind(user_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn attach_roles(&self, model: UserModel) -> RepoResult<User> {
        let roles = self
            .load_roles(&[model.id])
            .await?
            .into_iter()
            .map(Role::from)
            .collect();
        Ok(user_with_roles(model, roles))
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, email, first_name, last_name, created_at, updated_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match result {
            Some(model) => Ok(Some(self.attach_roles(model).await?)),
            None => Ok(None),
        }
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, email, first_name, last_name, created_at, updated_at
            FROM users
            WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match result {
            Some(model) => Ok(Some(self.attach_roles(model).await?)),
            None => Ok(None),
        }
    }

    #[instrument(skip(self))]
    async fn exists_by_email(&self, email: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn exists_by_username(&self, username: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<User>> {
        let results = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, email, first_name, last_name, created_at, updated_at
            FROM users
            ORDER BY created_at, id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let ids: Vec<Uuid> = results.iter().map(|m| m.id).collect();
        let mut roles = group_roles(self.load_roles(&ids).await?);

        Ok(results
            .into_iter()
            .map(|model| {
                let user_roles = roles.remove(&model.id).unwrap_or_default();
                user_with_roles(model, user_roles)
            })
            .collect())
    }

    #[instrument(skip(self, user, password_hash), fields(user_id = %user.id))]
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO users (id, username, email, password_hash, first_name, last_name, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(user.id.into_inner())
        .bind(&user.username)
        .bind(&user.email)
        .bind(password_hash)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, user_conflict))?;

        for role in &user.roles {
            sqlx::query("INSERT INTO user_roles (user_id, role_name) VALUES ($1, $2)")
                .bind(user.id.into_inner())
                .bind(&role.name)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, user, password_hash), fields(user_id = %user.id))]
    async fn update(&self, user: &User, password_hash: Option<&str>) -> RepoResult<()> {
        sqlx::query(
            r"
            UPDATE users
            SET email = $2,
                first_name = $3,
                last_name = $4,
                password_hash = COALESCE($5, password_hash),
                updated_at = $6
            WHERE id = $1
            ",
        )
        .bind(user.id.into_inner())
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(password_hash)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, user_conflict))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: UserId) -> RepoResult<Vec<PostId>> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Role links and tag links cascade; posts are removed here so their ids come back.
        let removed: Vec<Uuid> =
            sqlx::query_scalar("DELETE FROM posts WHERE user_id = $1 RETURNING id")
                .bind(id.into_inner())
                .fetch_all(&mut *tx)
                .await
                .map_err(map_db_error)?;

        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(removed.into_iter().map(PostId::from_uuid).collect())
    }
}
