//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use blog_core::entities::Post;
use blog_core::traits::{PostRepository, RepoResult};
use blog_core::value_objects::PostId;

use crate::mappers::{group_tags, post_with_tags};
use crate::models::{PostModel, PostTagModel};

use super::error::map_db_error;

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load the tags of every listed post in one round trip
    async fn load_tags(&self, post_ids: &[Uuid]) -> RepoResult<Vec<PostTagModel>> {
        sqlx::query_as::<_, PostTagModel>(
            r"
            SELECT pt.post_id, t.id AS tag_id, t.name
            FROM post_tags pt
            JOIN tags t ON t.id = pt.tag_id
            WHERE pt.post_id = ANY($1)
            ORDER BY t.name
            ",
        )
        .bind(post_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn assemble(&self, models: Vec<PostModel>) -> RepoResult<Vec<Post>> {
        let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let mut tags = group_tags(self.load_tags(&ids).await?);

        models
            .into_iter()
            .map(|model| {
                let post_tags = tags.remove(&model.id).unwrap_or_default();
                post_with_tags(model, post_tags)
            })
            .collect()
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(
            r"
            SELECT p.id, p.user_id, u.username, p.title, p.body, p.kind, p.created_at
            FROM posts p
            JOIN users u ON u.id = p.user_id
            WHERE p.id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match result {
            Some(model) => Ok(self.assemble(vec![model]).await?.pop()),
            None => Ok(None),
        }
    }

    #[instrument(skip(self, post), fields(post_id = %post.id, tags = post.tags.len()))]
    async fn create(&self, post: &Post) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO posts (id, user_id, title, body, kind, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(post.id.into_inner())
        .bind(post.author.id.into_inner())
        .bind(&post.title)
        .bind(&post.body)
        .bind(post.kind.as_str())
        .bind(post.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        for tag in &post.tags {
            sqlx::query("INSERT INTO post_tags (post_id, tag_id) VALUES ($1, $2)")
                .bind(post.id.into_inner())
                .bind(tag.id.into_inner())
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: PostId) -> RepoResult<()> {
        sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_created_since(&self, since: DateTime<Utc>) -> RepoResult<Vec<Post>> {
        let results = sqlx::query_as::<_, PostModel>(
            r"
            SELECT p.id, p.user_id, u.username, p.title, p.body, p.kind, p.created_at
            FROM posts p
            JOIN users u ON u.id = p.user_id
            WHERE p.created_at >= $1
            ORDER BY p.created_at, p.id
            ",
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        self.assemble(results).await
    }
}
