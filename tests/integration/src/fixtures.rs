//! Test fixtures and data generators

use std::sync::atomic::{AtomicU64, Ordering};

use blog_core::entities::{Author, Post, PostKind, Tag};
use blog_core::value_objects::{PostId, Principal, TagId};
use blog_service::dto::{CreatePostRequest, CreateUserRequest, MediaPostRequest, UserResponse};
use chrono::{DateTime, Utc};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Account request with unique username and email
pub fn unique_user_request() -> CreateUserRequest {
    let suffix = unique_suffix();
    user_request(&format!("user{suffix}"), &format!("user{suffix}@example.com"))
}

pub fn user_request(username: &str, email: &str) -> CreateUserRequest {
    CreateUserRequest {
        username: username.to_string(),
        email: email.to_string(),
        password: "TestPass123!".to_string(),
        first_name: None,
        last_name: None,
    }
}

pub fn text_post(title: &str, tags: &[&str]) -> CreatePostRequest {
    CreatePostRequest {
        title: title.to_string(),
        body: format!("{title} body"),
        tags: tags.iter().map(ToString::to_string).collect(),
    }
}

pub fn media_post(title: &str, tags: &[&str]) -> MediaPostRequest {
    MediaPostRequest {
        title: title.to_string(),
        kind: None,
        tags: tags.iter().map(ToString::to_string).collect(),
    }
}

/// Principal acting as the given account
pub fn principal_of(user: &UserResponse) -> Principal {
    Principal::new(user.username.clone())
}

pub fn tag(name: &str) -> Tag {
    Tag::new(TagId::generate(), name)
}

/// Text post with a fixed creation time, for seeding the store directly
pub fn post_at(author: Author, title: &str, created_at: DateTime<Utc>) -> Post {
    let mut post = Post::new(
        PostId::generate(),
        author,
        title.to_string(),
        "body".to_string(),
        PostKind::Text,
        Vec::new(),
    );
    post.created_at = created_at;
    post
}
