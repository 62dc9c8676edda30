//! Store context - wires configuration, storage and the post store together

use std::sync::Arc;

use post_common::AppConfig;
use post_core::PostCollection;
use post_db::{create_pool, ensure_schema, DatabaseConfig, MemoryPostCollection, PgPool, PgPostCollection};
use tracing::info;

use super::post::{PostStore, StoreSettings};

/// Errors raised while building a [`StoreContext`]
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Dependency container holding the post store and its storage
#[derive(Clone)]
pub struct StoreContext {
    pool: Option<PgPool>,
    store: PostStore,
}

impl StoreContext {
    /// Connect to PostgreSQL, make sure the schema exists and build the store
    pub async fn connect(config: &AppConfig) -> Result<Self, ContextError> {
        let pool = create_pool(&DatabaseConfig::from(&config.database)).await?;
        ensure_schema(&pool).await?;

        let collection: Arc<dyn PostCollection> = Arc::new(PgPostCollection::new(pool.clone()));
        let settings = StoreSettings::from(&config.store);

        info!(
            app = %config.app.name,
            timeout = ?settings.timeout,
            "Post store connected to PostgreSQL"
        );

        Ok(Self {
            pool: Some(pool),
            store: PostStore::with_settings(collection, settings),
        })
    }

    /// Build a store over an in-process collection
    pub fn in_memory(settings: StoreSettings) -> Self {
        Self {
            pool: None,
            store: PostStore::with_settings(Arc::new(MemoryPostCollection::new()), settings),
        }
    }

    /// Get the post store
    pub fn store(&self) -> &PostStore {
        &self.store
    }

    /// Get the PostgreSQL pool, when backed by one
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }
}

impl std::fmt::Debug for StoreContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("store", &self.store)
            .finish()
    }
}
