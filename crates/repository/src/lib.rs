pub mod cache;
pub mod cached_repository;
pub mod storage;

pub use cache::{
    CachedProduct, InMemoryProductCache, NoopProductCache, ProductCacheRepository, RedisProductCache,
};
pub use cached_repository::{CachedProductRepository, ProductRepository};
pub use storage::{
    run_migrations, InMemoryProductStorage, PostgresProductRepository, ProductRecord,
    ProductStorageRepository,
};

use domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Malformed record: {0}")]
    MalformedRecord(String),
}

impl RepositoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::Domain(e) if e.is_not_found())
    }
}
