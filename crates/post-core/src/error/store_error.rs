//! Closed error taxonomy of the post store

use thiserror::Error;

/// Errors returned by post store operations.
///
/// Every failure is terminal for the operation that raised it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The requested post does not exist
    #[error("post not found")]
    NotFound,

    /// Malformed input, or a storage failure with no more specific kind
    #[error("bad request")]
    BadRequest,

    /// The storage call went through but changed nothing, or there was no vote to withdraw
    #[error("failed to update field")]
    FailedUpdate,

    /// Nothing was deleted: unknown post or not its author
    #[error("failed to delete")]
    FailedDelete,

    /// A stored document could not be decoded during listing
    #[error("failed to convert values")]
    ConversionError,
}

impl StoreError {
    /// Stable error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound => "POST_NOT_FOUND",
            Self::BadRequest => "BAD_REQUEST",
            Self::FailedUpdate => "FAILED_UPDATE",
            Self::FailedDelete => "FAILED_DELETE",
            Self::ConversionError => "CONVERSION_ERROR",
        }
    }

    /// Suggested HTTP status for transport layers
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound | Self::FailedUpdate | Self::FailedDelete => 404,
            Self::BadRequest => 400,
            Self::ConversionError => 500,
        }
    }

    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
