//! # blog-service
//!
//! Application layer: the user and post services, their request/response
//! DTOs, and the wiring that assembles a [`ServiceContext`] from configuration.

pub mod bootstrap;
pub mod dto;
pub mod services;

pub use bootstrap::build_context;
pub use services::{
    PostService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, UserService,
};
