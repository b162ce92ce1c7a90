mod memory;
mod postgres;

pub use memory::InMemoryProductStorage;
pub use postgres::{run_migrations, PostgresProductRepository};

use async_trait::async_trait;
use domain::{Product, ProductReference};
use sqlx::FromRow;

use crate::RepositoryError;

/// Raw product row as stored in the `products` table
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ProductRecord {
    pub reference: String,
    pub brand_id: String,
}

impl ProductRecord {
    pub fn new(reference: impl Into<String>, brand_id: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            brand_id: brand_id.into(),
        }
    }

    /// Decode the row into the domain entity
    pub fn into_product(self) -> Result<Product, RepositoryError> {
        let reference = ProductReference::new(self.reference).map_err(|e| {
            RepositoryError::MalformedRecord(format!("product row has invalid reference: {}", e))
        })?;
        Ok(Product::new(reference, self.brand_id))
    }
}

/// Source of truth for products
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductStorageRepository: Send + Sync {
    /// Fetch a product, failing with `EntityNotFound` when no row matches
    async fn get(&self, reference: &ProductReference) -> Result<Product, RepositoryError>;

    /// Check the backend is reachable (health check)
    async fn ping(&self) -> Result<(), RepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_decodes_into_product() {
        let product = ProductRecord::new("ABC123", "42").into_product().unwrap();
        assert_eq!(product.reference().as_str(), "ABC123");
        assert_eq!(product.brand_id(), "42");
    }

    #[test]
    fn test_record_with_empty_reference_is_malformed() {
        let result = ProductRecord::new("", "42").into_product();
        assert!(matches!(result, Err(RepositoryError::MalformedRecord(_))));
    }
}
