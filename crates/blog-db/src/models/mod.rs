//! Database models - SQLx-compatible structs for PostgreSQL tables

mod post;
mod role;
mod tag;
mod user;

pub use post::{PostModel, PostTagModel};
pub use role::{RoleModel, UserRoleModel};
pub use tag::TagModel;
pub use user::UserModel;
