use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use domain::{Product, ProductReference};
use tokio::sync::RwLock;

use super::ProductCacheRepository;
use crate::RepositoryError;

/// Process-local cache; entries never expire
#[derive(Default)]
pub struct InMemoryProductCache {
    entries: RwLock<HashMap<ProductReference, Product>>,
    writes: AtomicU64,
}

impl InMemoryProductCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `save` calls so far
    pub fn writes(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }

    pub async fn contains(&self, reference: &ProductReference) -> bool {
        self.entries.read().await.contains_key(reference)
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl ProductCacheRepository for InMemoryProductCache {
    async fn get(&self, reference: &ProductReference) -> Result<Option<Product>, RepositoryError> {
        Ok(self.entries.read().await.get(reference).cloned())
    }

    async fn save(
        &self,
        reference: &ProductReference,
        product: &Product,
    ) -> Result<(), RepositoryError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.entries
            .write()
            .await
            .insert(reference.clone(), product.clone());
        Ok(())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}

/// Cache that stores nothing, used when caching is disabled
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProductCache;

#[async_trait]
impl ProductCacheRepository for NoopProductCache {
    async fn get(&self, _reference: &ProductReference) -> Result<Option<Product>, RepositoryError> {
        Ok(None)
    }

    async fn save(
        &self,
        _reference: &ProductReference,
        _product: &Product,
    ) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(reference: &str, brand_id: &str) -> Product {
        Product::new(ProductReference::new(reference).unwrap(), brand_id)
    }

    #[tokio::test]
    async fn test_save_then_get() {
        let cache = InMemoryProductCache::new();
        let p = product("R1", "B1");

        assert!(cache.get(p.reference()).await.unwrap().is_none());
        cache.save(p.reference(), &p).await.unwrap();

        assert_eq!(cache.get(p.reference()).await.unwrap(), Some(p));
        assert_eq!(cache.writes(), 1);
    }

    #[tokio::test]
    async fn test_save_overwrites() {
        let cache = InMemoryProductCache::new();
        let first = product("R1", "B1");
        let second = product("R1", "B2");

        cache.save(first.reference(), &first).await.unwrap();
        cache.save(second.reference(), &second).await.unwrap();

        assert_eq!(cache.len().await, 1);
        assert_eq!(cache.get(first.reference()).await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn test_noop_cache_always_misses() {
        let cache = NoopProductCache;
        let p = product("R1", "B1");

        cache.save(p.reference(), &p).await.unwrap();
        assert!(cache.get(p.reference()).await.unwrap().is_none());
    }
}
