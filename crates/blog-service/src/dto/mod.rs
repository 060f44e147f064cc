//! Data transfer objects for service requests and responses
//!
//! - Request DTOs with `validator` rules for the caller to enforce
//! - Response DTOs returned by the services
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    ChatMessage, CreatePostRequest, CreateUserRequest, MediaPostRequest, UpdateUserRequest,
};
pub use responses::{PostResponse, UserResponse};
