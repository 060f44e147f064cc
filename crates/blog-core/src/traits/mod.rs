//! Traits (ports) implemented by infrastructure crates

mod collaborators;
mod repositories;

pub use collaborators::{AccessPolicy, Action, MediaStore, PasswordHasher, UploadedMedia};
pub use repositories::{PostRepository, RepoResult, RoleRepository, TagRepository, UserRepository};
