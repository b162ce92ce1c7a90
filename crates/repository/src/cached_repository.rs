use std::sync::Arc;

use async_trait::async_trait;
use common::metrics::{record_cache_request, record_cache_write_failure};
use domain::{Product, ProductReference};
use tracing::{debug, warn};

use crate::cache::ProductCacheRepository;
use crate::storage::ProductStorageRepository;
use crate::RepositoryError;

const CACHE_TYPE: &str = "product";

/// Product lookup used by the use-case layer
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get(&self, reference: &ProductReference) -> Result<Product, RepositoryError>;
}

/// Read-through cache over product storage.
///
/// A cache hit never touches storage. Storage misses are not cached. A failed
/// cache write is logged and counted, and the stored product is still returned.
pub struct CachedProductRepository {
    cache: Arc<dyn ProductCacheRepository>,
    storage: Arc<dyn ProductStorageRepository>,
}

impl CachedProductRepository {
    pub fn new(
        cache: Arc<dyn ProductCacheRepository>,
        storage: Arc<dyn ProductStorageRepository>,
    ) -> Self {
        Self { cache, storage }
    }
}

#[async_trait]
impl ProductRepository for CachedProductRepository {
    async fn get(&self, reference: &ProductReference) -> Result<Product, RepositoryError> {
        if let Some(cached) = self.cache.get(reference).await? {
            record_cache_request(CACHE_TYPE, true);
            debug!("Cache hit for product: {}", reference);
            return Ok(cached);
        }

        record_cache_request(CACHE_TYPE, false);
        debug!("Cache miss for product: {}, querying storage", reference);

        let product = self.storage.get(reference).await?;

        if let Err(e) = self.cache.save(reference, &product).await {
            record_cache_write_failure(CACHE_TYPE);
            warn!("Failed to cache product {}: {}", reference, e);
        }

        Ok(product)
    }
}
