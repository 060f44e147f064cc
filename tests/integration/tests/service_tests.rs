//! Service-level tests over in-memory collaborators
//!
//! Run with: cargo test -p integration-tests --test service_tests

use std::sync::Arc;

use blog_core::entities::{PostKind, Role};
use blog_core::error::DomainError;
use blog_core::value_objects::{PostId, Principal, UserId};
use blog_service::dto::UpdateUserRequest;
use blog_service::ServiceError;
use chrono::{Duration, Utc};
use integration_tests::*;

fn domain(err: &ServiceError) -> &DomainError {
    err.as_domain().expect("domain error")
}

// ============================================================================
// User creation
// ============================================================================

#[tokio::test]
async fn test_create_user_assigns_default_role_and_hashes_password() {
    let h = TestHarness::new();

    let user = h
        .users()
        .create_user(user_request("alice", "alice@example.com"))
        .await
        .unwrap();

    assert_eq!(user.username, "alice");
    assert_eq!(user.roles, vec![Role::USER.to_string()]);
    assert_eq!(
        h.store.password_hash_of("alice").as_deref(),
        Some("hashed:TestPass123!")
    );
}

#[tokio::test]
async fn test_duplicate_email_is_rejected_and_nothing_stored() {
    let h = TestHarness::new();
    h.users()
        .create_user(user_request("first", "a@x.com"))
        .await
        .unwrap();

    let err = h
        .users()
        .create_user(user_request("second", "a@x.com"))
        .await
        .unwrap_err();

    assert!(matches!(domain(&err), DomainError::EmailAlreadyExists));
    assert_eq!(err.error_code(), "EMAIL_EXISTS");
    assert_eq!(h.store.user_count(), 1);
    assert_eq!(h.store.user_writes(), 1);
}

#[tokio::test]
async fn test_duplicate_username_is_rejected() {
    let h = TestHarness::new();
    h.register("taken").await;

    let err = h
        .users()
        .create_user(user_request("taken", "other@example.com"))
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), "USERNAME_EXISTS");
    assert_eq!(h.store.user_count(), 1);
}

#[tokio::test]
async fn test_email_is_checked_before_username() {
    let h = TestHarness::new();
    h.users()
        .create_user(user_request("dup", "dup@example.com"))
        .await
        .unwrap();

    let err = h
        .users()
        .create_user(user_request("dup", "dup@example.com"))
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), "EMAIL_EXISTS");
}

#[tokio::test]
async fn test_missing_default_role_is_invalid_role() {
    let h = TestHarness::with_store(InMemoryStore::new());

    let err = h
        .users()
        .create_user(unique_user_request())
        .await
        .unwrap_err();

    assert!(matches!(domain(&err), DomainError::InvalidRole(name) if name == Role::USER));
    assert_eq!(h.store.user_count(), 0);
    assert_eq!(h.store.user_writes(), 0);
}

// ============================================================================
// User queries, updates, deletion
// ============================================================================

#[tokio::test]
async fn test_find_user_by_id() {
    let h = TestHarness::new();
    let created = h.register("finder").await;
    let id = UserId::parse(&created.id).unwrap();

    let found = h.users().find_user_by_id(id).await.unwrap();
    assert_eq!(found, created);

    let err = h
        .users()
        .find_user_by_id(UserId::generate())
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "USER_NOT_FOUND");
}

#[tokio::test]
async fn test_get_all_requires_admin() {
    let h = TestHarness::new();
    let alice = h.register("alice").await;
    h.register("bob").await;

    let err = h.users().get_all(&principal_of(&alice)).await.unwrap_err();
    assert_eq!(err.error_code(), "ACCESS_DENIED");
    assert_eq!(err.status_code(), 403);

    let admin = Principal::new("root").with_role(Role::ADMIN);
    let all = h.users().get_all(&admin).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn test_update_overwrites_only_given_fields() {
    let h = TestHarness::new();
    let created = h.register("editor").await;
    let id = UserId::parse(&created.id).unwrap();

    let updated = h
        .users()
        .user_update(
            id,
            UpdateUserRequest {
                first_name: Some("Ada".to_string()),
                password: Some("NewPass456!".to_string()),
                ..UpdateUserRequest::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.first_name.as_deref(), Some("Ada"));
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.username, "editor");
    assert_eq!(updated.roles, created.roles);
    assert_eq!(
        h.store.password_hash_of("editor").as_deref(),
        Some("hashed:NewPass456!")
    );
}

#[tokio::test]
async fn test_update_to_taken_email_is_rejected() {
    let h = TestHarness::new();
    h.register("owner").await;
    let other = h.register("other").await;
    let id = UserId::parse(&other.id).unwrap();

    let err = h
        .users()
        .user_update(
            id,
            UpdateUserRequest {
                email: Some("owner@example.com".to_string()),
                first_name: Some("Mallory".to_string()),
                ..UpdateUserRequest::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(domain(&err), DomainError::EmailAlreadyExists));
    let stored = h.users().find_user_by_id(id).await.unwrap();
    assert_eq!(stored, other);
}

#[tokio::test]
async fn test_empty_update_writes_nothing() {
    let h = TestHarness::new();
    let created = h.register("idle").await;
    let writes = h.store.user_writes();

    let unchanged = h
        .users()
        .user_update(UserId::parse(&created.id).unwrap(), UpdateUserRequest::default())
        .await
        .unwrap();

    assert_eq!(unchanged, created);
    assert_eq!(h.store.user_writes(), writes);
}

#[tokio::test]
async fn test_update_unknown_user() {
    let h = TestHarness::new();

    let err = h
        .users()
        .user_update(UserId::generate(), UpdateUserRequest::default())
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), "USER_NOT_FOUND");
    assert_eq!(h.store.user_writes(), 0);
}

#[tokio::test]
async fn test_delete_user_is_idempotent_and_cascades() {
    let h = TestHarness::new();
    let user = h.register("leaver").await;
    let id = UserId::parse(&user.id).unwrap();
    h.posts()
        .create_post(text_post("bye", &[]), &principal_of(&user))
        .await
        .unwrap();
    assert_eq!(h.store.post_count(), 1);

    h.users().delete_user(id).await.unwrap();
    h.users().delete_user(id).await.unwrap();
    h.users().delete_user(UserId::generate()).await.unwrap();

    assert_eq!(h.store.user_count(), 0);
    assert_eq!(h.store.post_count(), 0);
}

#[tokio::test]
async fn test_delete_user_evicts_cached_posts() {
    let h = TestHarness::new();
    let user = h.register("vanishing").await;
    let created = h
        .posts()
        .create_post(text_post("bye", &[]), &principal_of(&user))
        .await
        .unwrap();
    let post_id = PostId::parse(&created.id).unwrap();
    h.posts().get_posts_by_id(post_id).await.unwrap();

    h.users()
        .delete_user(UserId::parse(&user.id).unwrap())
        .await
        .unwrap();

    let err = h.posts().get_posts_by_id(post_id).await.unwrap_err();
    assert_eq!(err.error_code(), "POST_NOT_FOUND");
    assert_eq!(h.store.post_lookups(), 2);
}

// ============================================================================
// Post creation
// ============================================================================

#[tokio::test]
async fn test_create_post_attaches_only_known_tags() {
    let h = TestHarness::new();
    h.store.seed_tag(tag("rust"));
    let user = h.register("writer").await;

    let post = h
        .posts()
        .create_post(text_post("Hello", &["rust", "nonexistent"]), &principal_of(&user))
        .await
        .unwrap();

    assert_eq!(post.tags, vec!["rust"]);
    assert_eq!(post.username, "writer");
    assert_eq!(post.kind, PostKind::Text);
    assert_eq!(post.body, "Hello body");
}

#[tokio::test]
async fn test_create_post_for_unknown_principal() {
    let h = TestHarness::new();

    let err = h
        .posts()
        .create_post(text_post("ghost", &[]), &Principal::new("nobody"))
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), "USER_NOT_FOUND");
    assert_eq!(h.store.post_count(), 0);
}

#[tokio::test]
async fn test_image_post_uses_upload_url_verbatim() {
    let h = TestHarness::new();
    h.store.seed_tag(tag("photo"));
    let user = h.register("photographer").await;

    let post = h
        .posts()
        .create_post_image(
            media_post("Sunset", &["photo", "missing"]),
            vec![1, 2, 3],
            &principal_of(&user),
        )
        .await
        .unwrap();

    assert_eq!(h.media.image_uploads(), 1);
    assert_eq!(h.media.video_uploads(), 0);
    assert_eq!(post.body, "https://media.test/image/1-3");
    assert_eq!(post.kind, PostKind::Image);
    assert_eq!(post.tags, vec!["photo"]);
    assert_eq!(post.username, "photographer");
}

#[tokio::test]
async fn test_video_post_defaults_kind() {
    let h = TestHarness::new();
    let user = h.register("director").await;

    let post = h
        .posts()
        .create_post_video(media_post("Clip", &[]), vec![0; 10], &principal_of(&user))
        .await
        .unwrap();

    assert_eq!(post.kind, PostKind::Video);
    assert_eq!(post.body, "https://media.test/video/1-10");
}

#[tokio::test]
async fn test_media_post_rejects_text_kind_before_upload() {
    let h = TestHarness::new();
    let user = h.register("mislabeled").await;
    let mut request = media_post("Not text", &[]);
    request.kind = Some(PostKind::Text);

    let err = h
        .posts()
        .create_post_image(request, vec![1], &principal_of(&user))
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), "VALIDATION_ERROR");
    assert_eq!(h.media.image_uploads(), 0);
    assert_eq!(h.store.post_count(), 0);
}

#[tokio::test]
async fn test_media_failure_creates_nothing() {
    let h = TestHarness::with_failing_media();
    let user = h.register("unlucky").await;

    let err = h
        .posts()
        .create_post_image(media_post("Broken", &[]), vec![1], &principal_of(&user))
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), "MEDIA_UPLOAD_ERROR");
    assert_eq!(h.media.image_uploads(), 1);
    assert_eq!(h.store.post_count(), 0);
}

// ============================================================================
// Post reads
// ============================================================================

#[tokio::test]
async fn test_get_post_by_id_second_call_is_cache_hit() {
    let h = TestHarness::new();
    let user = h.register("reader").await;
    let created = h
        .posts()
        .create_post(text_post("Cached", &[]), &principal_of(&user))
        .await
        .unwrap();
    let id = PostId::parse(&created.id).unwrap();

    let first = h.posts().get_posts_by_id(id).await.unwrap();
    let second = h.posts().get_posts_by_id(id).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first, created);
    assert_eq!(h.store.post_lookups(), 1);
}

#[tokio::test]
async fn test_get_post_by_id_not_found_is_not_cached() {
    let h = TestHarness::new();
    let id = PostId::generate();

    for _ in 0..2 {
        let err = h.posts().get_posts_by_id(id).await.unwrap_err();
        assert_eq!(err.error_code(), "POST_NOT_FOUND");
    }
    assert_eq!(h.store.post_lookups(), 2);
}

#[tokio::test]
async fn test_cache_outage_falls_back_to_store() {
    let cache = Arc::new(UnavailableCache::default());
    let h = TestHarness::with_cache(cache.clone());
    let user = h.register("resilient").await;
    let created = h
        .posts()
        .create_post(text_post("Still works", &[]), &principal_of(&user))
        .await
        .unwrap();
    let id = PostId::parse(&created.id).unwrap();

    let fetched = h.posts().get_posts_by_id(id).await.unwrap();
    assert_eq!(fetched, created);
    assert_eq!(h.store.post_lookups(), 1);
    // one failed read, one failed write
    assert_eq!(cache.calls(), 2);
}

#[tokio::test]
async fn test_delete_post_invalidates_cache() {
    let h = TestHarness::new();
    let user = h.register("deleter").await;
    let created = h
        .posts()
        .create_post(text_post("Doomed", &[]), &principal_of(&user))
        .await
        .unwrap();
    let id = PostId::parse(&created.id).unwrap();

    h.posts().get_posts_by_id(id).await.unwrap();
    h.posts().delete_post(id).await.unwrap();
    h.posts().delete_post(id).await.unwrap();

    let err = h.posts().get_posts_by_id(id).await.unwrap_err();
    assert_eq!(err.error_code(), "POST_NOT_FOUND");
}

#[tokio::test]
async fn test_pagination_returns_posts_since_in_order() {
    let h = TestHarness::new();
    let user = h.register("historian").await;
    let author = TestHarness::author_of(&user);
    let now = Utc::now();

    h.store
        .seed_post(post_at(author.clone(), "old", now - Duration::hours(3)));
    h.store
        .seed_post(post_at(author.clone(), "newest", now - Duration::minutes(1)));
    h.store
        .seed_post(post_at(author.clone(), "boundary", now - Duration::hours(1)));
    h.store
        .seed_post(post_at(author, "middle", now - Duration::minutes(30)));

    let since = now - Duration::hours(1);
    let posts = h.posts().get_posts_pagination(since).await.unwrap();

    let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["boundary", "middle", "newest"]);
    assert!(posts.iter().all(|p| p.created_at >= since));
    assert!(posts.windows(2).all(|w| w[0].created_at <= w[1].created_at));
    assert!(posts.iter().all(|p| p.username == "historian"));
}

#[tokio::test]
async fn test_pagination_future_timestamp_is_empty() {
    let h = TestHarness::new();
    let user = h.register("early").await;
    h.posts()
        .create_post(text_post("now", &[]), &principal_of(&user))
        .await
        .unwrap();

    let posts = h
        .posts()
        .get_posts_pagination(Utc::now() + Duration::days(1))
        .await
        .unwrap();
    assert!(posts.is_empty());
}
