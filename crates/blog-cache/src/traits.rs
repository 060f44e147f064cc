//! Response cache port

use async_trait::async_trait;

use crate::error::CacheResult;

/// Key-value cache for already-mapped responses.
///
/// Implementations must be safe to share between tasks. Concurrent misses on
/// the same key may both insert; the last insert wins.
#[async_trait]
pub trait ResponseCache<V>: Send + Sync
where
    V: Clone + Send + Sync + 'static,
{
    /// Cached value for `key`, if present and not expired
    async fn get(&self, key: &str) -> CacheResult<Option<V>>;

    /// Store `value` under `key`, replacing any previous entry
    async fn insert(&self, key: &str, value: V) -> CacheResult<()>;

    /// Drop the entry for `key`. Missing keys are not an error.
    async fn invalidate(&self, key: &str) -> CacheResult<()>;
}
