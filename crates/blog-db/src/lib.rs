//! # blog-db
//!
//! Database layer implementing the blog-core repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! The reference schema lives in `schema.sql` next to this crate's manifest.
//! Applying it is left to the deployment; this crate never migrates.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use blog_db::{create_pool, DatabaseConfig, PgUserRepository};
//!
//! async fn example(app: &blog_common::AppConfig) -> Result<(), sqlx::Error> {
//!     let pool = create_pool(&DatabaseConfig::from(&app.database)).await?;
//!     let users = PgUserRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

/// Reference DDL matching the queries in this crate
pub const SCHEMA: &str = include_str!("../schema.sql");

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use repositories::{
    PgPostRepository, PgRoleRepository, PgTagRepository, PgUserRepository,
};
