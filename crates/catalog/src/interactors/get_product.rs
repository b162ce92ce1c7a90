use std::sync::Arc;

use domain::{DomainError, Product, ProductReference};
use repository::ProductRepository;
use tracing::debug;
use validator::Validate;

use crate::errors::UseCaseError;

/// Parameters for fetching a single product
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct GetProductParams {
    #[validate(length(min = 1, max = 255, message = "reference must be 1 to 255 characters"))]
    pub reference: String,
}

impl GetProductParams {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
        }
    }
}

/// Fetches one product by reference
pub struct GetProductInteractor {
    repository: Arc<dyn ProductRepository>,
}

impl GetProductInteractor {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, params: GetProductParams) -> Result<Product, UseCaseError> {
        params
            .validate()
            .map_err(|e| DomainError::InvalidParameter(e.to_string()))?;

        let reference = ProductReference::new(params.reference)?;
        debug!("Executing get product for reference: {}", reference);

        Ok(self.repository.get(&reference).await?)
    }
}
