//! Post entity - a text, image, or video entry owned by one user

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::entities::{now, Tag};
use crate::value_objects::{PostId, UserId};

/// What the post body holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    /// Body is raw text
    #[default]
    Text,
    /// Body is a media store URL pointing at an image
    Image,
    /// Body is a media store URL pointing at a video
    Video,
}

impl PostKind {
    /// Stored/wire representation
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Video => "video",
        }
    }

    /// Whether the body is a media URL rather than text
    #[inline]
    pub const fn is_media(self) -> bool {
        matches!(self, Self::Image | Self::Video)
    }
}

impl fmt::Display for PostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing an unknown post kind
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown post kind: {0}")]
pub struct PostKindParseError(pub String);

impl FromStr for PostKind {
    type Err = PostKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            _ => Err(PostKindParseError(s.to_string())),
        }
    }
}

/// Snapshot of the owning user carried with every post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: UserId,
    pub username: String,
}

impl Author {
    pub fn new(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }
}

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub author: Author,
    pub title: String,
    pub body: String,
    pub kind: PostKind,
    pub tags: Vec<Tag>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new Post. Tags behave as a set: duplicates by id are dropped.
    pub fn new(
        id: PostId,
        author: Author,
        title: String,
        body: String,
        kind: PostKind,
        tags: Vec<Tag>,
    ) -> Self {
        let mut post = Self {
            id,
            author,
            title,
            body,
            kind,
            tags: Vec::with_capacity(tags.len()),
            created_at: now(),
        };
        for tag in tags {
            post.add_tag(tag);
        }
        post
    }

    /// Attach a tag unless it is already present
    pub fn add_tag(&mut self, tag: Tag) {
        if !self.tags.iter().any(|t| t.id == tag.id) {
            self.tags.push(tag);
        }
    }

    /// Names of the attached tags
    pub fn tag_names(&self) -> Vec<String> {
        self.tags.iter().map(|t| t.name.clone()).collect()
    }

    /// Whether the body is a media URL
    #[inline]
    pub fn is_media(&self) -> bool {
        self.kind.is_media()
    }
}
