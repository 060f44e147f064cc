//! Post service
//!
//! Text and media post creation, time-window listing, deletion, and the
//! read-through cached single-post fetch.

use blog_core::entities::{Author, Post, PostKind, Tag, User};
use blog_core::error::DomainError;
use blog_core::traits::UploadedMedia;
use blog_core::value_objects::{PostId, Principal};
use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};

use crate::dto::{CreatePostRequest, MediaPostRequest, PostResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a post authored by the principal
    #[instrument(skip(self, request, principal), fields(principal = %principal.username))]
    pub async fn create_post(
        &self,
        request: CreatePostRequest,
        principal: &Principal,
    ) -> ServiceResult<PostResponse> {
        let tags = self.resolve_tags(&request.tags).await?;
        let author = self.resolve_author(principal).await?;

        self.save(author, request.title, request.body, PostKind::Text, tags)
            .await
    }

    /// Upload an image and create a post whose body is its URL
    #[instrument(
        skip(self, request, file, principal),
        fields(principal = %principal.username, size = file.len())
    )]
    pub async fn create_post_image(
        &self,
        request: MediaPostRequest,
        file: Vec<u8>,
        principal: &Principal,
    ) -> ServiceResult<PostResponse> {
        let kind = media_kind(request.kind, PostKind::Image)?;
        let uploaded = self.ctx.media_store().upload_image(file).await?;
        self.create_media_post(request, uploaded, kind, principal)
            .await
    }

    /// Upload a video and create a post whose body is its URL
    #[instrument(
        skip(self, request, file, principal),
        fields(principal = %principal.username, size = file.len())
    )]
    pub async fn create_post_video(
        &self,
        request: MediaPostRequest,
        file: Vec<u8>,
        principal: &Principal,
    ) -> ServiceResult<PostResponse> {
        let kind = media_kind(request.kind, PostKind::Video)?;
        let uploaded = self.ctx.media_store().upload_video(file).await?;
        self.create_media_post(request, uploaded, kind, principal)
            .await
    }

    /// Posts created at or after `since`, oldest first
    #[instrument(skip(self))]
    pub async fn get_posts_pagination(
        &self,
        since: DateTime<Utc>,
    ) -> ServiceResult<Vec<PostResponse>> {
        let posts = self.ctx.post_repo().find_created_since(since).await?;
        Ok(posts.iter().map(PostResponse::from).collect())
    }

    /// Fetch one post, served from the cache when possible
    #[instrument(skip(self))]
    pub async fn get_posts_by_id(&self, post_id: PostId) -> ServiceResult<PostResponse> {
        let key = post_id.to_string();
        let cache = self.ctx.post_cache();

        match cache.get(&key).await {
            Ok(Some(cached)) => {
                debug!(post_id = %post_id, "Post cache hit");
                return Ok(cached);
            }
            Ok(None) => debug!(post_id = %post_id, "Post cache miss"),
            Err(e) => warn!(post_id = %post_id, error = %e, "Post cache read failed"),
        }

        let post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or(DomainError::PostNotFound(post_id))?;
        let response = PostResponse::from(&post);

        if let Err(e) = cache.insert(&key, response.clone()).await {
            warn!(post_id = %post_id, error = %e, "Post cache write failed");
        }

        Ok(response)
    }

    /// Delete a post and drop its cache entry. Unknown IDs are not an error.
    #[instrument(skip(self))]
    pub async fn delete_post(&self, post_id: PostId) -> ServiceResult<()> {
        self.ctx.post_repo().delete(post_id).await?;

        if let Err(e) = self.ctx.post_cache().invalidate(&post_id.to_string()).await {
            warn!(post_id = %post_id, error = %e, "Post cache invalidation failed");
        }

        info!(post_id = %post_id, "Post deleted");
        Ok(())
    }

    // === Helpers ===

    async fn create_media_post(
        &self,
        request: MediaPostRequest,
        uploaded: UploadedMedia,
        kind: PostKind,
        principal: &Principal,
    ) -> ServiceResult<PostResponse> {
        let tags = self.resolve_tags(&request.tags).await?;
        let author = self.resolve_author(principal).await?;

        self.save(author, request.title, uploaded.url, kind, tags)
            .await
    }

    /// Existing tags among `names`; unknown names are dropped
    async fn resolve_tags(&self, names: &[String]) -> ServiceResult<Vec<Tag>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let tags = self.ctx.tag_repo().find_all_by_name_in(names).await?;
        if tags.len() < names.len() {
            debug!(
                requested = names.len(),
                found = tags.len(),
                "Unknown tag names ignored"
            );
        }
        Ok(tags)
    }

    async fn resolve_author(&self, principal: &Principal) -> ServiceResult<User> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username(principal.name())
            .await?
            .ok_or_else(|| DomainError::UserNotFound(principal.username.clone()))?;
        Ok(user)
    }

    async fn save(
        &self,
        author: User,
        title: String,
        body: String,
        kind: PostKind,
        tags: Vec<Tag>,
    ) -> ServiceResult<PostResponse> {
        let post = Post::new(
            PostId::generate(),
            Author::new(author.id, author.username),
            title,
            body,
            kind,
            tags,
        );

        self.ctx.post_repo().create(&post).await?;

        info!(post_id = %post.id, kind = %post.kind, "Post created");

        Ok(PostResponse::from(&post))
    }
}

/// Kind of a media post: the requested one, else the endpoint's default.
/// A media body is a URL, so `text` is refused.
fn media_kind(requested: Option<PostKind>, default: PostKind) -> Result<PostKind, DomainError> {
    match requested {
        None => Ok(default),
        Some(kind) if kind.is_media() => Ok(kind),
        Some(kind) => Err(DomainError::ValidationError(format!(
            "{kind} is not a media post kind"
        ))),
    }
}
