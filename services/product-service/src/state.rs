use anyhow::Result;
use catalog::CatalogFactory;
use common::config::{AppConfig, CacheBackend};
use repository::{
    run_migrations, InMemoryProductCache, NoopProductCache, PostgresProductRepository,
    ProductCacheRepository, ProductStorageRepository, RedisProductCache,
};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub factory: CatalogFactory,
}

impl AppState {
    pub async fn new(config: &AppConfig) -> Result<Self> {
        info!("Initializing application state...");

        info!("Connecting to database...");
        let pool = PgPoolOptions::new()
            .max_connections(config.database.max_connections)
            .connect(&config.database.url)
            .await?;
        info!("Database connected");

        if config.database.run_migrations {
            info!("Running database migrations");
            run_migrations(&pool).await?;
        }

        let storage = Arc::new(PostgresProductRepository::new(pool)) as Arc<dyn ProductStorageRepository>;

        let cache: Arc<dyn ProductCacheRepository> = match config.cache.backend {
            CacheBackend::Redis => {
                info!("Connecting to Redis...");
                let cache = RedisProductCache::new(&config.cache.redis_url, config.cache.ttl_seconds).await?;
                info!("Redis connected");
                Arc::new(cache)
            }
            CacheBackend::Memory => {
                info!("Using in-process product cache");
                Arc::new(InMemoryProductCache::new())
            }
            CacheBackend::None => {
                info!("Product cache disabled");
                Arc::new(NoopProductCache)
            }
        };

        Ok(Self::from_factory(CatalogFactory::new(storage, cache)))
    }

    pub fn from_factory(factory: CatalogFactory) -> Self {
        Self { factory }
    }
}
