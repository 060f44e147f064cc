//! Post / tag model -> entity mappers

use std::collections::HashMap;

use blog_core::entities::{Author, Post, PostKind, Tag};
use blog_core::error::DomainError;
use blog_core::value_objects::{PostId, TagId, UserId};
use uuid::Uuid;

use crate::models::{PostModel, PostTagModel, TagModel};

impl From<TagModel> for Tag {
    fn from(model: TagModel) -> Self {
        Tag::new(TagId::from_uuid(model.id), model.name)
    }
}

impl From<PostTagModel> for Tag {
    fn from(model: PostTagModel) -> Self {
        Tag::new(TagId::from_uuid(model.tag_id), model.name)
    }
}

/// Build a Post entity from its row and separately loaded tags.
///
/// Fails only if the stored `kind` column holds a value the domain does not know.
pub fn post_with_tags(model: PostModel, tags: Vec<Tag>) -> Result<Post, DomainError> {
    let kind: PostKind = model
        .kind
        .parse()
        .map_err(|e| DomainError::DatabaseError(format!("post {}: {e}", model.id)))?;

    Ok(Post {
        id: PostId::from_uuid(model.id),
        author: Author::new(UserId::from_uuid(model.user_id), model.username),
        title: model.title,
        body: model.body,
        kind,
        tags,
        created_at: model.created_at,
    })
}

/// Bucket tag rows by post id
pub fn group_tags(rows: Vec<PostTagModel>) -> HashMap<Uuid, Vec<Tag>> {
    let mut grouped: HashMap<Uuid, Vec<Tag>> = HashMap::new();
    for row in rows {
        grouped.entry(row.post_id).or_default().push(Tag::from(row));
    }
    grouped
}
