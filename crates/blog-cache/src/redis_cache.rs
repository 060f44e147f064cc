//! Redis-backed response cache

use std::marker::PhantomData;
use std::time::Duration;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::CacheResult;
use crate::pool::RedisPool;
use crate::traits::ResponseCache;

/// Shared cache storing JSON values under `{namespace}:{key}` with `SET EX`
pub struct RedisCache<V> {
    pool: RedisPool,
    namespace: String,
    ttl_seconds: u64,
    _marker: PhantomData<fn() -> V>,
}

impl<V> RedisCache<V> {
    /// Create a cache over `pool`; `ttl` is rounded down to whole seconds (minimum 1)
    pub fn new(pool: RedisPool, namespace: impl Into<String>, ttl: Duration) -> Self {
        Self {
            pool,
            namespace: namespace.into(),
            ttl_seconds: ttl.as_secs().max(1),
            _marker: PhantomData,
        }
    }

    fn key(&self, key: &str) -> String {
        format!("{}:{key}", self.namespace)
    }
}

#[async_trait]
impl<V> ResponseCache<V> for RedisCache<V>
where
    V: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &str) -> CacheResult<Option<V>> {
        match self.pool.get_string(&self.key(key)).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn insert(&self, key: &str, value: V) -> CacheResult<()> {
        let serialized = serde_json::to_string(&value)?;
        self.pool
            .set_ex(&self.key(key), &serialized, self.ttl_seconds)
            .await?;
        Ok(())
    }

    async fn invalidate(&self, key: &str) -> CacheResult<()> {
        self.pool.delete(&self.key(key)).await?;
        Ok(())
    }
}
