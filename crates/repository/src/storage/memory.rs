use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use common::metrics::record_storage_read;
use domain::{DomainError, Product, ProductReference, PRODUCT_ENTITY};
use tokio::sync::RwLock;

use super::{ProductRecord, ProductStorageRepository};
use crate::RepositoryError;

/// Map-backed storage holding raw records, for tests and local runs
#[derive(Default)]
pub struct InMemoryProductStorage {
    records: RwLock<HashMap<String, ProductRecord>>,
    reads: AtomicU64,
}

impl InMemoryProductStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = ProductRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|record| (record.reference.clone(), record))
            .collect();

        Self {
            records: RwLock::new(records),
            reads: AtomicU64::new(0),
        }
    }

    pub async fn insert(&self, record: ProductRecord) {
        self.records
            .write()
            .await
            .insert(record.reference.clone(), record);
    }

    /// Number of `get` calls served so far
    pub fn reads(&self) -> u64 {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductStorageRepository for InMemoryProductStorage {
    async fn get(&self, reference: &ProductReference) -> Result<Product, RepositoryError> {
        self.reads.fetch_add(1, Ordering::SeqCst);

        let record = self.records.read().await.get(reference.as_str()).cloned();
        record_storage_read(PRODUCT_ENTITY, record.is_some());

        match record {
            Some(record) => record.into_product(),
            None => Err(DomainError::not_found(PRODUCT_ENTITY, reference.as_str()).into()),
        }
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_returns_decoded_product() {
        let storage = InMemoryProductStorage::with_records([ProductRecord::new("ABC123", "42")]);
        let reference = ProductReference::new("ABC123").unwrap();

        let product = storage.get(&reference).await.unwrap();
        assert_eq!(product.brand_id(), "42");
        assert_eq!(storage.reads(), 1);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let storage = InMemoryProductStorage::new();
        let reference = ProductReference::new("UNKNOWN").unwrap();

        let err = storage.get(&reference).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Product does not exist!");
    }

    #[tokio::test]
    async fn test_insert_overwrites_record() {
        let storage = InMemoryProductStorage::new();
        storage.insert(ProductRecord::new("R1", "B1")).await;
        storage.insert(ProductRecord::new("R1", "B2")).await;

        let reference = ProductReference::new("R1").unwrap();
        assert_eq!(storage.get(&reference).await.unwrap().brand_id(), "B2");
    }
}
