//! Request DTOs
//!
//! All request DTOs implement `Deserialize` and `Validate`. Running the
//! validation is the caller's job; the services trust their input.

use blog_core::PostKind;
use serde::{Deserialize, Serialize};
use validator::Validate;

// ============================================================================
// User Requests
// ============================================================================

/// Account creation request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 64, message = "Username must be 3-64 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    #[validate(length(max = 100))]
    pub first_name: Option<String>,

    #[validate(length(max = 100))]
    pub last_name: Option<String>,
}

/// Partial account update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(max = 100))]
    pub first_name: Option<String>,

    #[validate(length(max = 100))]
    pub last_name: Option<String>,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: Option<String>,
}

impl UpdateUserRequest {
    /// Whether the request carries any field at all
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.password.is_none()
    }
}

// ============================================================================
// Post Requests
// ============================================================================

/// Text post creation request. The body is stored as raw text.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    pub body: String,

    /// Tag names; names that match no existing tag are ignored
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Metadata sent alongside an uploaded image or video
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MediaPostRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    /// Defaults to the kind matching the upload endpoint; must be a media kind
    pub kind: Option<PostKind>,

    #[serde(default)]
    pub tags: Vec<String>,
}

// ============================================================================
// Chat
// ============================================================================

/// Direct chat message as carried over the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ChatMessage {
    #[validate(length(min = 1))]
    pub sender: String,

    /// Older clients send this field as `recipent`
    #[serde(alias = "recipent")]
    #[validate(length(min = 1))]
    pub recipient: String,

    #[validate(length(min = 1, max = 2000, message = "Content must be 1-2000 characters"))]
    pub content: String,
}
