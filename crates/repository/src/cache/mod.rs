mod memory;
mod redis_cache;

pub use memory::{InMemoryProductCache, NoopProductCache};
pub use redis_cache::RedisProductCache;

use async_trait::async_trait;
use domain::{Product, ProductReference};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::RepositoryError;

/// Fast-access product store. A miss is `Ok(None)`, never an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductCacheRepository: Send + Sync {
    async fn get(&self, reference: &ProductReference) -> Result<Option<Product>, RepositoryError>;

    /// Store `product` under `reference`, replacing any previous entry
    async fn save(&self, reference: &ProductReference, product: &Product)
        -> Result<(), RepositoryError>;

    /// Check the backend is reachable (health check)
    async fn ping(&self) -> Result<(), RepositoryError>;
}

/// Cached payload for a product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedProduct {
    pub reference: String,
    pub brand_id: String,
}

impl CachedProduct {
    pub fn key(reference: &ProductReference) -> String {
        format!("product:{}", reference)
    }

    /// Decode a raw cache payload. Unreadable entries are logged and treated as a miss.
    pub fn decode(raw: &str) -> Option<Product> {
        let decoded = serde_json::from_str::<CachedProduct>(raw)
            .map_err(RepositoryError::from)
            .and_then(CachedProduct::into_product);

        match decoded {
            Ok(product) => Some(product),
            Err(e) => {
                warn!("Discarding unreadable cache entry: {}", e);
                None
            }
        }
    }

    pub fn into_product(self) -> Result<Product, RepositoryError> {
        let reference = ProductReference::new(self.reference).map_err(|e| {
            RepositoryError::MalformedRecord(format!("cached product has invalid reference: {}", e))
        })?;
        Ok(Product::new(reference, self.brand_id))
    }
}

impl From<&Product> for CachedProduct {
    fn from(product: &Product) -> Self {
        Self {
            reference: product.reference().to_string(),
            brand_id: product.brand_id().to_string(),
        }
    }
}
