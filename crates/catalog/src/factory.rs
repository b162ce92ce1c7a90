use std::sync::Arc;

use repository::{
    CachedProductRepository, ProductCacheRepository, ProductRepository, ProductStorageRepository,
};

use crate::interactors::GetProductInteractor;
use crate::views::ProductView;

/// Composition root for the catalog object graph.
///
/// Holds the long-lived backend handles and wires a fresh repository,
/// interactor and view around them on every call.
#[derive(Clone)]
pub struct CatalogFactory {
    storage: Arc<dyn ProductStorageRepository>,
    cache: Arc<dyn ProductCacheRepository>,
}

impl CatalogFactory {
    pub fn new(
        storage: Arc<dyn ProductStorageRepository>,
        cache: Arc<dyn ProductCacheRepository>,
    ) -> Self {
        Self { storage, cache }
    }

    pub fn storage(&self) -> Arc<dyn ProductStorageRepository> {
        self.storage.clone()
    }

    pub fn cache(&self) -> Arc<dyn ProductCacheRepository> {
        self.cache.clone()
    }

    pub fn product_repository(&self) -> Arc<dyn ProductRepository> {
        Arc::new(CachedProductRepository::new(self.cache(), self.storage()))
    }

    pub fn get_product_interactor(&self) -> GetProductInteractor {
        GetProductInteractor::new(self.product_repository())
    }

    pub fn product_view(&self) -> ProductView {
        ProductView::new(self.get_product_interactor())
    }
}
