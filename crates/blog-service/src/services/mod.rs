//! Business logic services
//!
//! Services borrow a [`ServiceContext`] and orchestrate the store, cache,
//! media and security collaborators it holds.

pub mod context;
pub mod error;
pub mod post;
pub mod user;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use post::PostService;
pub use user::UserService;
