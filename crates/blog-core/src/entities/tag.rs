//! Tag entity

use crate::value_objects::TagId;

/// Tag entity. Names are unique in the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
}

impl Tag {
    /// Create a new Tag
    pub fn new(id: TagId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
