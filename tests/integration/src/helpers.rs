//! Test helpers for building stores

use anyhow::Result;
use post_common::{try_init_tracing, AppConfig};
use post_service::{PostStore, StoreContext, StoreSettings};

/// Initialize tracing once per test process; later calls are no-ops
pub fn init_test_tracing() {
    let _ = try_init_tracing();
}

/// A store over a fresh in-process collection
pub fn memory_store() -> PostStore {
    init_test_tracing();
    StoreContext::in_memory(StoreSettings::default()).store().clone()
}

/// Check whether a PostgreSQL test database is configured
pub fn check_test_env() -> bool {
    let _ = dotenvy::dotenv();
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }
    true
}

/// A store backed by the PostgreSQL database from the environment
pub async fn pg_store() -> Result<PostStore> {
    init_test_tracing();
    let config = AppConfig::from_env()?;
    let ctx = StoreContext::connect(&config).await?;
    Ok(ctx.store().clone())
}
