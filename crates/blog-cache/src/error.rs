//! Cache error types

use blog_core::DomainError;

use crate::pool::RedisPoolError;

/// Error type for cache operations
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache backend error: {0}")]
    Backend(String),

    #[error("Redis error: {0}")]
    Redis(#[from] RedisPoolError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for cache operations
pub type CacheResult<T> = Result<T, CacheError>;

impl From<CacheError> for DomainError {
    fn from(err: CacheError) -> Self {
        DomainError::CacheError(err.to_string())
    }
}
