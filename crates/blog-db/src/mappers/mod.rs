//! Model to entity mappers
//!
//! - `From<Model> for Entity` where the conversion cannot fail
//! - `*_with_*` helpers that attach rows loaded by a second query

mod post;
mod user;

pub use post::{group_tags, post_with_tags};
pub use user::{group_roles, user_with_roles};
