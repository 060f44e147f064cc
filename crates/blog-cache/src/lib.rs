//! # blog-cache
//!
//! Read-through response caching for the service layer.
//!
//! ## Features
//!
//! - **`ResponseCache`**: the port the services talk to
//! - **Memory backend**: bounded in-process cache (moka, TinyLFU + TTL)
//! - **Redis backend**: shared cache for multi-instance deployments, on a deadpool connection pool
//!
//! ## Example
//!
//! ```ignore
//! use blog_cache::build_cache;
//!
//! let cache = build_cache::<PostResponse>(&app_config.cache, "post")?;
//! cache.insert("42", response).await?;
//! ```

mod error;
mod memory;
pub mod pool;
mod redis_cache;
mod traits;

use std::sync::Arc;
use std::time::Duration;

use blog_common::{CacheBackend, CacheConfig};
use serde::{de::DeserializeOwned, Serialize};

pub use error::{CacheError, CacheResult};
pub use memory::MemoryCache;
pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};
pub use redis_cache::RedisCache;
pub use traits::ResponseCache;

/// Build the configured cache backend for values of type `V`.
///
/// `namespace` prefixes every Redis key (`{namespace}:{key}`); the memory
/// backend keeps one instance per namespace so it is ignored there.
///
/// # Errors
/// Fails when the Redis backend is selected without a Redis section, or the pool cannot be built.
pub fn build_cache<V>(
    config: &CacheConfig,
    namespace: &str,
) -> CacheResult<Arc<dyn ResponseCache<V>>>
where
    V: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    let ttl = Duration::from_secs(config.ttl_seconds);

    match config.backend {
        CacheBackend::Memory => Ok(Arc::new(MemoryCache::new(config.max_capacity, ttl))),
        CacheBackend::Redis => {
            let redis = config
                .redis
                .as_ref()
                .ok_or_else(|| CacheError::Backend("redis backend selected without REDIS_URL".into()))?;
            let pool = RedisPool::from_config(redis)?;
            Ok(Arc::new(RedisCache::new(pool, namespace, ttl)))
        }
    }
}
