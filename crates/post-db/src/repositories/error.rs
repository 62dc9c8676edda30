//! Error handling utilities for collections

use post_core::CollectionError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to CollectionError
pub fn map_db_error(e: SqlxError) -> CollectionError {
    CollectionError::Transport(e.to_string())
}
