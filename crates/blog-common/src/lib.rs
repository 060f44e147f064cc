//! # blog-common
//!
//! Shared utilities including configuration, error handling, password hashing,
//! access policies, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{
    hash_password, verify_password, AllowAllPolicy, Argon2PasswordHasher, RoleBasedPolicy,
};
pub use config::{
    AccountConfig, AppConfig, AppSettings, CacheBackend, CacheConfig, ConfigError,
    DatabaseConfig, Environment, RedisConfig, SeedConfig, StorageConfig,
};
pub use error::{AppError, AppResult};
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
