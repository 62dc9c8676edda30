//! Storage-level failures reported by a document collection

use thiserror::Error;

/// Failure of a single collection call.
///
/// These never reach callers of the store directly; the store maps them
/// into [`StoreError`](super::StoreError) per operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// The call did not complete (connection, driver or timeout failure)
    #[error("transport error: {0}")]
    Transport(String),

    /// A stored document could not be decoded into a post
    #[error("decode error: {0}")]
    Decode(String),

    /// A post could not be encoded for storage
    #[error("encode error: {0}")]
    Encode(String),
}

impl CollectionError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    #[inline]
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

impl From<serde_json::Error> for CollectionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Result type for collection calls
pub type CollectionResult<T> = Result<T, CollectionError>;
