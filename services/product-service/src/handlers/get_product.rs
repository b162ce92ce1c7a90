use async_trait::async_trait;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use catalog::{BoundaryAdapter, GetProductParams, ProductView, ResultEnvelope};
use serde_json::{json, Value};
use tracing::{error, info};

use crate::state::AppState;

/// HTTP side of the product view
pub struct HttpProductAdapter {
    view: ProductView,
}

impl HttpProductAdapter {
    pub fn new(view: ProductView) -> Self {
        Self { view }
    }
}

fn into_response(envelope: ResultEnvelope) -> (StatusCode, Json<Value>) {
    let status = StatusCode::from_u16(envelope.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(envelope.body))
}

#[async_trait]
impl BoundaryAdapter for HttpProductAdapter {
    type Request = String;
    type Response = (StatusCode, Json<Value>);

    async fn dispatch(&self, reference: String) -> Self::Response {
        match self.view.handle(GetProductParams::new(reference.clone())).await {
            Ok(envelope) => into_response(envelope),
            Err(e) => {
                error!("Failed to fetch product {}: {}", reference, e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error" })),
                )
            }
        }
    }
}

/// Get a single product by reference
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> (StatusCode, Json<Value>) {
    info!("Fetching product: {}", reference);

    HttpProductAdapter::new(state.factory.product_view())
        .dispatch(reference)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_status_is_preserved() {
        let (status, Json(body)) = into_response(ResultEnvelope::error("Product does not exist!", 404));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Product does not exist!"}));
    }

    #[test]
    fn test_out_of_range_status_becomes_500() {
        let (status, _) = into_response(ResultEnvelope::new(json!({}), 1000));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
