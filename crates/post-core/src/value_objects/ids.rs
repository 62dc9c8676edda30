//! Identifiers for posts, comments and users
//!
//! Post and comment ids are opaque UUIDs generated when the document is
//! created. User ids come from the external identity provider and are
//! carried through unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Error when parsing an identifier from its string form
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("invalid id format")]
    InvalidFormat,
}

/// Unique identifier of a post document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(Uuid);

impl PostId {
    /// Generate a fresh random id
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    #[inline]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }

    /// Parse from the hyphenated string representation
    pub fn parse(s: &str) -> Result<Self, IdParseError> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| IdParseError::InvalidFormat)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PostId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Unique identifier of a comment embedded in a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(Uuid);

impl CommentId {
    /// Generate a fresh random id
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    #[inline]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }

    pub fn parse(s: &str) -> Result<Self, IdParseError> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| IdParseError::InvalidFormat)
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CommentId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Id of an authenticated user, as issued by the identity provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}
