//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in blog-core.

mod error;
mod post;
mod role;
mod tag;
mod user;

pub use post::PgPostRepository;
pub use role::PgRoleRepository;
pub use tag::PgTagRepository;
pub use user::PgUserRepository;
