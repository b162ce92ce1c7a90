use async_trait::async_trait;
use common::metrics::record_storage_read;
use domain::{DomainError, Product, ProductReference, PRODUCT_ENTITY};
use sqlx::PgPool;
use tracing::debug;

use super::{ProductRecord, ProductStorageRepository};
use crate::RepositoryError;

/// Apply the bundled schema migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), RepositoryError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.into()))
}

/// PostgreSQL implementation of ProductStorageRepository
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStorageRepository for PostgresProductRepository {
    async fn get(&self, reference: &ProductReference) -> Result<Product, RepositoryError> {
        let record = sqlx::query_as::<_, ProductRecord>(
            r#"
            SELECT reference, brand_id
            FROM products
            WHERE reference = $1
            "#,
        )
        .bind(reference.as_str())
        .fetch_optional(&self.pool)
        .await?;

        record_storage_read(PRODUCT_ENTITY, record.is_some());

        match record {
            Some(record) => record.into_product(),
            None => {
                debug!("No product row for reference: {}", reference);
                Err(DomainError::not_found(PRODUCT_ENTITY, reference.as_str()).into())
            }
        }
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
