use std::time::Instant;

use common::metrics::record_query;
use domain::DomainError;
use repository::RepositoryError;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::errors::UseCaseError;
use crate::interactors::{GetProductInteractor, GetProductParams};
use crate::serializers::ProductSerializer;

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_NOT_FOUND: u16 = 404;

const QUERY_TYPE: &str = "get_product";

/// Transport-neutral response: a JSON body and a status code
#[derive(Debug, Clone, PartialEq)]
pub struct ResultEnvelope {
    pub body: Value,
    pub status: u16,
}

impl ResultEnvelope {
    pub fn new(body: Value, status: u16) -> Self {
        Self { body, status }
    }

    pub fn error(message: impl Into<String>, status: u16) -> Self {
        Self::new(json!({ "error": message.into() }), status)
    }
}

/// Maps the get-product use case onto result envelopes.
///
/// Only domain errors are translated. Infrastructure faults come back as
/// `Err` for the boundary to handle.
pub struct ProductView {
    interactor: GetProductInteractor,
}

impl ProductView {
    pub fn new(interactor: GetProductInteractor) -> Self {
        Self { interactor }
    }

    pub async fn handle(&self, params: GetProductParams) -> Result<ResultEnvelope, RepositoryError> {
        let start = Instant::now();
        let reference = params.reference.clone();

        let (envelope, status) = match self.interactor.execute(params).await {
            Ok(product) => (
                ResultEnvelope::new(ProductSerializer::serialize(&product), STATUS_OK),
                "success",
            ),
            Err(UseCaseError::Domain(e @ DomainError::EntityNotFound { .. })) => {
                info!("Product not found: {}", reference);
                (ResultEnvelope::error(e.to_string(), STATUS_NOT_FOUND), "not_found")
            }
            Err(UseCaseError::Domain(e @ DomainError::InvalidParameter(_))) => {
                warn!("Rejected product lookup: {}", e);
                (ResultEnvelope::error(e.to_string(), STATUS_BAD_REQUEST), "invalid")
            }
            Err(UseCaseError::Repository(e)) => {
                record_query(QUERY_TYPE, "error", start.elapsed().as_secs_f64());
                return Err(e);
            }
        };

        record_query(QUERY_TYPE, status, start.elapsed().as_secs_f64());
        Ok(envelope)
    }
}
