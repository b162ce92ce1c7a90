use async_trait::async_trait;
use domain::{Product, ProductReference};
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, RedisError};
use tracing::{debug, info};

use super::{CachedProduct, ProductCacheRepository};
use crate::RepositoryError;

/// Redis cache for products
#[derive(Clone)]
pub struct RedisProductCache {
    conn: ConnectionManager,
    ttl_seconds: u64,
}

impl RedisProductCache {
    /// Create new Redis cache
    pub async fn new(redis_url: &str, ttl_seconds: u64) -> Result<Self, RepositoryError> {
        let client = redis::Client::open(redis_url)
            .map_err(|e| RepositoryError::CacheError(format!("Failed to create Redis client: {}", e)))?;

        let conn = ConnectionManager::new(client)
            .await
            .map_err(|e| RepositoryError::CacheError(format!("Failed to connect to Redis: {}", e)))?;

        info!("Redis cache initialized with TTL: {} seconds", ttl_seconds);
        Ok(Self { conn, ttl_seconds })
    }
}

fn cache_error(action: &str, key: &str, e: RedisError) -> RepositoryError {
    RepositoryError::CacheError(format!("Failed to {} {}: {}", action, key, e))
}

#[async_trait]
impl ProductCacheRepository for RedisProductCache {
    async fn get(&self, reference: &ProductReference) -> Result<Option<Product>, RepositoryError> {
        let cache_key = CachedProduct::key(reference);

        let value: Option<String> = self
            .conn
            .clone()
            .get(&cache_key)
            .await
            .map_err(|e| cache_error("read", &cache_key, e))?;

        let Some(value) = value else {
            debug!("Cache miss for key: {}", cache_key);
            return Ok(None);
        };

        debug!("Cache hit for key: {}", cache_key);
        Ok(CachedProduct::decode(&value))
    }

    async fn save(
        &self,
        reference: &ProductReference,
        product: &Product,
    ) -> Result<(), RepositoryError> {
        let cache_key = CachedProduct::key(reference);
        let json = serde_json::to_string(&CachedProduct::from(product))?;

        self.conn
            .clone()
            .set_ex::<_, _, ()>(&cache_key, json, self.ttl_seconds)
            .await
            .map_err(|e| cache_error("write", &cache_key, e))?;

        debug!("Cached value for key: {} with TTL: {}s", cache_key, self.ttl_seconds);
        Ok(())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        let result: Result<String, RedisError> = redis::cmd("PING")
            .query_async(&mut self.conn.clone())
            .await;

        result
            .map(|_| ())
            .map_err(|e| RepositoryError::CacheError(format!("Redis ping failed: {}", e)))
    }
}
