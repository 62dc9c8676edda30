//! Error types for the post store

mod collection_error;
mod store_error;

pub use collection_error::{CollectionError, CollectionResult};
pub use store_error::{StoreError, StoreResult};
