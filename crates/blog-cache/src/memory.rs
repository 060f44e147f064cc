//! Bounded in-process cache backed by moka

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;

use crate::error::CacheResult;
use crate::traits::ResponseCache;

/// In-process cache with a size bound and a time-to-live
#[derive(Clone)]
pub struct MemoryCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    inner: Cache<String, V>,
}

impl<V> MemoryCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Create a cache holding at most `max_capacity` entries for `ttl` each
    pub fn new(max_capacity: u64, ttl: Duration) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(ttl)
            .build();

        tracing::debug!(max_capacity, ttl_secs = ttl.as_secs(), "Memory cache created");
        Self { inner }
    }

    /// Approximate number of live entries
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }
}

impl<V> std::fmt::Debug for MemoryCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCache")
            .field("entries", &self.inner.entry_count())
            .finish()
    }
}

#[async_trait]
impl<V> ResponseCache<V> for MemoryCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &str) -> CacheResult<Option<V>> {
        Ok(self.inner.get(key).await)
    }

    async fn insert(&self, key: &str, value: V) -> CacheResult<()> {
        self.inner.insert(key.to_string(), value).await;
        Ok(())
    }

    async fn invalidate(&self, key: &str) -> CacheResult<()> {
        self.inner.invalidate(key).await;
        Ok(())
    }
}
