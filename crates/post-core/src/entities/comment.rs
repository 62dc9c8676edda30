//! Comment entity - embedded in its parent post, never edited

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::post::Author;
use crate::value_objects::{CommentId, UserId};

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub author: Author,
    pub body: String,
    pub created: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment with a fresh id and the current timestamp
    pub fn new(author: Author, body: String) -> Self {
        Self {
            id: CommentId::generate(),
            author,
            body,
            created: super::now_utc(),
        }
    }

    #[inline]
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author.id == user_id
    }
}
