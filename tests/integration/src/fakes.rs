//! In-memory fakes with call counters

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use blog_cache::{CacheError, CacheResult, ResponseCache};
use blog_core::entities::{Post, Role, Tag, User};
use blog_core::error::DomainError;
use blog_core::traits::{
    MediaStore, PasswordHasher, PostRepository, RepoResult, RoleRepository, TagRepository,
    UploadedMedia, UserRepository,
};
use blog_core::value_objects::{PostId, UserId};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;

// ============================================================================
// Store
// ============================================================================

#[derive(Default)]
struct Tables {
    users: HashMap<UserId, (User, String)>,
    roles: HashMap<String, Role>,
    tags: Vec<Tag>,
    posts: HashMap<PostId, Post>,
}

/// One in-memory database implementing every repository trait.
///
/// Writes are applied under a single lock, so a multi-row write is atomic
/// the same way a store transaction is.
#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
    post_lookups: AtomicUsize,
    user_writes: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with the default and admin roles
    pub fn with_default_roles() -> Self {
        let store = Self::new();
        store.seed_role(Role::USER);
        store.seed_role(Role::ADMIN);
        store
    }

    pub fn seed_role(&self, name: &str) {
        self.tables
            .write()
            .roles
            .insert(name.to_string(), Role::new(name));
    }

    pub fn seed_tag(&self, tag: Tag) {
        self.tables.write().tags.push(tag);
    }

    /// Insert a post as-is, keeping its `created_at`
    pub fn seed_post(&self, post: Post) {
        self.tables.write().posts.insert(post.id, post);
    }

    pub fn user_count(&self) -> usize {
        self.tables.read().users.len()
    }

    pub fn post_count(&self) -> usize {
        self.tables.read().posts.len()
    }

    /// Password hash the store holds for `username`
    pub fn password_hash_of(&self, username: &str) -> Option<String> {
        self.tables
            .read()
            .users
            .values()
            .find(|(u, _)| u.username == username)
            .map(|(_, hash)| hash.clone())
    }

    /// Number of `PostRepository::find_by_id` calls so far
    pub fn post_lookups(&self) -> usize {
        self.post_lookups.load(Ordering::SeqCst)
    }

    /// Number of `UserRepository::create` / `update` calls so far
    pub fn user_writes(&self) -> usize {
        self.user_writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        Ok(self.tables.read().users.get(&id).map(|(u, _)| u.clone()))
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self
            .tables
            .read()
            .users
            .values()
            .find(|(u, _)| u.username == username)
            .map(|(u, _)| u.clone()))
    }

    async fn exists_by_email(&self, email: &str) -> RepoResult<bool> {
        Ok(self.tables.read().users.values().any(|(u, _)| u.email == email))
    }

    async fn exists_by_username(&self, username: &str) -> RepoResult<bool> {
        Ok(self
            .tables
            .read()
            .users
            .values()
            .any(|(u, _)| u.username == username))
    }

    async fn find_all(&self) -> RepoResult<Vec<User>> {
        let mut users: Vec<User> = self
            .tables
            .read()
            .users
            .values()
            .map(|(u, _)| u.clone())
            .collect();
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(users)
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        self.user_writes.fetch_add(1, Ordering::SeqCst);
        let mut tables = self.tables.write();

        if tables.users.values().any(|(u, _)| u.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        if tables.users.values().any(|(u, _)| u.username == user.username) {
            return Err(DomainError::UsernameAlreadyExists);
        }
        if let Some(missing) = user.roles.iter().find(|r| !tables.roles.contains_key(&r.name)) {
            return Err(DomainError::DatabaseError(format!(
                "unknown role {}",
                missing.name
            )));
        }

        tables
            .users
            .insert(user.id, (user.clone(), password_hash.to_string()));
        Ok(())
    }

    async fn update(&self, user: &User, password_hash: Option<&str>) -> RepoResult<()> {
        self.user_writes.fetch_add(1, Ordering::SeqCst);
        let mut tables = self.tables.write();

        if tables
            .users
            .values()
            .any(|(u, _)| u.id != user.id && u.email == user.email)
        {
            return Err(DomainError::EmailAlreadyExists);
        }

        if let Some((stored, hash)) = tables.users.get_mut(&user.id) {
            stored.email.clone_from(&user.email);
            stored.first_name.clone_from(&user.first_name);
            stored.last_name.clone_from(&user.last_name);
            stored.updated_at = user.updated_at;
            if let Some(new_hash) = password_hash {
                *hash = new_hash.to_string();
            }
        }
        Ok(())
    }

    async fn delete(&self, id: UserId) -> RepoResult<Vec<PostId>> {
        let mut tables = self.tables.write();
        tables.users.remove(&id);

        let mut removed = Vec::new();
        tables.posts.retain(|post_id, p| {
            let keep = p.author.id != id;
            if !keep {
                removed.push(*post_id);
            }
            keep
        });
        Ok(removed)
    }
}

#[async_trait]
impl RoleRepository for InMemoryStore {
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Role>> {
        Ok(self.tables.read().roles.get(name).cloned())
    }

    async fn create(&self, role: &Role) -> RepoResult<()> {
        self.tables
            .write()
            .roles
            .entry(role.name.clone())
            .or_insert_with(|| role.clone());
        Ok(())
    }
}

#[async_trait]
impl TagRepository for InMemoryStore {
    async fn find_all_by_name_in(&self, names: &[String]) -> RepoResult<Vec<Tag>> {
        Ok(self
            .tables
            .read()
            .tags
            .iter()
            .filter(|t| names.contains(&t.name))
            .cloned()
            .collect())
    }

    async fn create(&self, tag: &Tag) -> RepoResult<()> {
        let mut tables = self.tables.write();
        if !tables.tags.iter().any(|t| t.name == tag.name) {
            tables.tags.push(tag.clone());
        }
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryStore {
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>> {
        self.post_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.tables.read().posts.get(&id).cloned())
    }

    async fn create(&self, post: &Post) -> RepoResult<()> {
        let mut tables = self.tables.write();
        if !tables.users.contains_key(&post.author.id) {
            return Err(DomainError::DatabaseError("author does not exist".into()));
        }
        tables.posts.insert(post.id, post.clone());
        Ok(())
    }

    async fn delete(&self, id: PostId) -> RepoResult<()> {
        self.tables.write().posts.remove(&id);
        Ok(())
    }

    async fn find_created_since(&self, since: DateTime<Utc>) -> RepoResult<Vec<Post>> {
        let mut posts: Vec<Post> = self
            .tables
            .read()
            .posts
            .values()
            .filter(|p| p.created_at >= since)
            .cloned()
            .collect();
        posts.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(posts)
    }
}

// ============================================================================
// Media
// ============================================================================

/// Media store that records calls and hands out predictable URLs
#[derive(Default)]
pub struct FakeMediaStore {
    image_uploads: AtomicUsize,
    video_uploads: AtomicUsize,
    fail: bool,
}

impl FakeMediaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every upload fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn image_uploads(&self) -> usize {
        self.image_uploads.load(Ordering::SeqCst)
    }

    pub fn video_uploads(&self) -> usize {
        self.video_uploads.load(Ordering::SeqCst)
    }

    fn upload(&self, counter: &AtomicUsize, kind: &str, bytes: &[u8]) -> RepoResult<UploadedMedia> {
        let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail {
            return Err(DomainError::MediaUpload("provider unavailable".into()));
        }
        Ok(UploadedMedia {
            url: format!("https://media.test/{kind}/{n}-{}", bytes.len()),
        })
    }
}

#[async_trait]
impl MediaStore for FakeMediaStore {
    async fn upload_image(&self, bytes: Vec<u8>) -> RepoResult<UploadedMedia> {
        self.upload(&self.image_uploads, "image", &bytes)
    }

    async fn upload_video(&self, bytes: Vec<u8>) -> RepoResult<UploadedMedia> {
        self.upload(&self.video_uploads, "video", &bytes)
    }
}

// ============================================================================
// Security
// ============================================================================

/// Reversible stand-in for a real hasher so tests can see what was stored
#[derive(Debug, Default)]
pub struct PrefixHasher;

impl PasswordHasher for PrefixHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        Ok(format!("hashed:{password}"))
    }
}

// ============================================================================
// Cache
// ============================================================================

/// Cache whose backend is always down
#[derive(Debug, Default)]
pub struct UnavailableCache {
    calls: AtomicUsize,
}

impl UnavailableCache {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> CacheResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(CacheError::Backend("connection refused".into()))
    }
}

#[async_trait]
impl<V> ResponseCache<V> for UnavailableCache
where
    V: Clone + Send + Sync + 'static,
{
    async fn get(&self, _key: &str) -> CacheResult<Option<V>> {
        self.fail()
    }

    async fn insert(&self, _key: &str, _value: V) -> CacheResult<()> {
        self.fail()
    }

    async fn invalidate(&self, _key: &str) -> CacheResult<()> {
        self.fail()
    }
}
