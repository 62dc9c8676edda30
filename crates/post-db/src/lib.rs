//! # post-db
//!
//! Storage layer implementing the [`PostCollection`](post_core::PostCollection) port.
//!
//! ## Overview
//!
//! - [`PgPostCollection`]: one JSONB document per post in PostgreSQL, every
//!   single-document mutation done as one `UPDATE ... RETURNING` statement
//! - [`MemoryPostCollection`]: insertion-ordered JSON documents behind a lock,
//!   for tests and embedded use
//! - Connection pool management and schema setup
//!
//! ## Usage
//!
//! ```rust,ignore
//! use post_common::AppConfig;
//! use post_db::{create_pool, ensure_schema, DatabaseConfig, PgPostCollection};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let app = AppConfig::from_env()?;
//!     let pool = create_pool(&DatabaseConfig::from(&app.database)).await?;
//!     ensure_schema(&pool).await?;
//!     let posts = PgPostCollection::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, ensure_schema, DatabaseConfig, PgPool};
pub use repositories::{MemoryPostCollection, PgPostCollection};
