//! # blog-core
//!
//! Domain layer containing entities, value objects, and the traits (ports)
//! implemented by the persistence, media, cache, and security adapters.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Author, Post, PostKind, PostKindParseError, Role, Tag, User};
pub use error::DomainError;
pub use traits::{
    AccessPolicy, Action, MediaStore, PasswordHasher, PostRepository, RepoResult, RoleRepository,
    TagRepository, UploadedMedia, UserRepository,
};
pub use value_objects::{IdParseError, PostId, Principal, TagId, UserId};
