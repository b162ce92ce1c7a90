use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use common::metrics;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    match metrics::gather_metrics() {
        Ok(metrics) => (StatusCode::OK, metrics),
        Err(e) => {
            tracing::error!("Failed to gather metrics: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, String::from("Failed to gather metrics"))
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health checks
        .route("/health", get(handlers::health::health_check))
        .route("/health/ready", get(handlers::health::readiness_check))
        .route("/metrics", get(metrics_handler))

        // Product queries
        .route("/products/:reference", get(handlers::get_product::get_product_handler))

        // Middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use catalog::CatalogFactory;
    use domain::{Product, ProductReference};
    use repository::{
        InMemoryProductCache, InMemoryProductStorage, ProductCacheRepository, ProductRecord,
        ProductStorageRepository, RepositoryError,
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct UnreachableStorage;

    #[async_trait]
    impl ProductStorageRepository for UnreachableStorage {
        async fn get(&self, _reference: &ProductReference) -> Result<Product, RepositoryError> {
            Err(RepositoryError::MalformedRecord("storage offline".to_string()))
        }

        async fn ping(&self) -> Result<(), RepositoryError> {
            Err(RepositoryError::MalformedRecord("storage offline".to_string()))
        }
    }

    struct UnreachableCache;

    #[async_trait]
    impl ProductCacheRepository for UnreachableCache {
        async fn get(&self, _reference: &ProductReference) -> Result<Option<Product>, RepositoryError> {
            Err(RepositoryError::CacheError("cache offline".to_string()))
        }

        async fn save(
            &self,
            _reference: &ProductReference,
            _product: &Product,
        ) -> Result<(), RepositoryError> {
            Err(RepositoryError::CacheError("cache offline".to_string()))
        }

        async fn ping(&self) -> Result<(), RepositoryError> {
            Err(RepositoryError::CacheError("cache offline".to_string()))
        }
    }

    fn router_with(
        storage: Arc<dyn ProductStorageRepository>,
        cache: Arc<dyn ProductCacheRepository>,
    ) -> Router {
        create_router(AppState::from_factory(CatalogFactory::new(storage, cache)))
    }

    async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_get_product_cold_cache() {
        let storage = Arc::new(InMemoryProductStorage::with_records([ProductRecord::new(
            "ABC123", "42",
        )]));
        let cache = Arc::new(InMemoryProductCache::new());
        let router = router_with(storage.clone(), cache.clone());

        let (status, body) = get_json(&router, "/products/ABC123").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"reference": "ABC123", "brand_id": "42"}));
        assert!(cache.contains(&ProductReference::new("ABC123").unwrap()).await);
    }

    #[tokio::test]
    async fn test_get_unknown_product() {
        let router = router_with(
            Arc::new(InMemoryProductStorage::new()),
            Arc::new(InMemoryProductCache::new()),
        );

        let (status, body) = get_json(&router, "/products/UNKNOWN").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Product does not exist!"}));
    }

    #[tokio::test]
    async fn test_repeated_request_is_served_from_cache() {
        let storage = Arc::new(InMemoryProductStorage::with_records([ProductRecord::new(
            "ABC123", "42",
        )]));
        let cache = Arc::new(InMemoryProductCache::new());
        let router = router_with(storage.clone(), cache.clone());

        let first = get_json(&router, "/products/ABC123").await;
        let second = get_json(&router, "/products/ABC123").await;

        assert_eq!(first, second);
        assert_eq!(storage.reads(), 1);
    }

    #[tokio::test]
    async fn test_overlong_reference_is_rejected() {
        let storage = Arc::new(InMemoryProductStorage::new());
        let router = router_with(storage.clone(), Arc::new(InMemoryProductCache::new()));

        let uri = format!("/products/{}", "x".repeat(300));
        let (status, body) = get_json(&router, &uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid parameter"));
        assert_eq!(storage.reads(), 0);
    }

    #[tokio::test]
    async fn test_storage_fault_is_500() {
        let router = router_with(Arc::new(UnreachableStorage), Arc::new(InMemoryProductCache::new()));

        let (status, body) = get_json(&router, "/products/ABC123").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Internal server error"}));
    }

    #[tokio::test]
    async fn test_readiness_reports_failing_storage() {
        let router = router_with(Arc::new(UnreachableStorage), Arc::new(InMemoryProductCache::new()));

        let (status, body) = get_json(&router, "/health/ready").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body, json!({"status": "unavailable", "failing": ["storage"]}));
    }

    #[tokio::test]
    async fn test_readiness_ok() {
        let router = router_with(
            Arc::new(InMemoryProductStorage::new()),
            Arc::new(InMemoryProductCache::new()),
        );

        let (status, body) = get_json(&router, "/health/ready").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
    }

    #[tokio::test]
    async fn test_readiness_reports_failing_cache() {
        let router = router_with(Arc::new(InMemoryProductStorage::new()), Arc::new(UnreachableCache));

        let (status, body) = get_json(&router, "/health/ready").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body, json!({"status": "unavailable", "failing": ["cache"]}));
    }

    #[tokio::test]
    async fn test_readiness_reports_every_failing_component() {
        let router = router_with(Arc::new(UnreachableStorage), Arc::new(UnreachableCache));

        let (status, body) = get_json(&router, "/health/ready").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["failing"], json!(["storage", "cache"]));
    }
}
