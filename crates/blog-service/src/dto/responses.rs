//! Response DTOs
//!
//! IDs are serialized as strings. Responses never carry a password or its hash.

use blog_core::PostKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub roles: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Post projection enriched with the author's username.
///
/// Also the value type of the post cache, hence `Deserialize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub body: String,
    pub kind: PostKind,
    pub created_at: DateTime<Utc>,
    pub tags: Vec<String>,
    pub username: String,
}
