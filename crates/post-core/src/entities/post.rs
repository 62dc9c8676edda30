//! Post entity - the persisted document with its vote ledger and comments

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::comment::Comment;
use super::vote::{Vote, VoteValue};
use crate::value_objects::{CommentId, PostId, UserId};

/// Kind of post; fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    Text,
    Link,
}

impl PostKind {
    /// Parse the wire name. Returns `None` for anything but `text` / `link`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "text" => Some(Self::Text),
            "link" => Some(Self::Link),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Link => "link",
        }
    }
}

/// Snapshot of the author's identity taken when the content was created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: UserId,
    pub username: String,
}

impl Author {
    pub fn new(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }
}

/// Post document
///
/// Field names on the wire follow the document layout shared with the
/// frontend (`upvotePercentage`, `upvotecount`, `votecount`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub score: i64,
    pub views: i64,
    #[serde(rename = "type")]
    pub kind: PostKind,
    pub title: String,
    pub author: Author,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub votes: Vec<Vote>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub created: DateTime<Utc>,
    #[serde(rename = "upvotePercentage")]
    pub upvote_percentage: i64,
    #[serde(rename = "upvotecount")]
    pub upvote_count: i64,
    #[serde(rename = "votecount")]
    pub vote_count: i64,
}

impl Post {
    /// Create a new post carrying its author's implicit upvote.
    ///
    /// `content` becomes the `text` of a text post or the `url` of a link post.
    pub fn new(
        kind: PostKind,
        title: String,
        category: String,
        content: String,
        author: Author,
    ) -> Self {
        let (text, url) = match kind {
            PostKind::Text => (Some(content), None),
            PostKind::Link => (None, Some(content)),
        };
        let self_vote = Vote::new(author.id, VoteValue::Up);

        Self {
            id: PostId::generate(),
            score: 1,
            views: 0,
            kind,
            title,
            author,
            category,
            text,
            url,
            votes: vec![self_vote],
            comments: Vec::new(),
            created: super::now_utc(),
            upvote_percentage: 100,
            upvote_count: 1,
            vote_count: 1,
        }
    }

    #[inline]
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author.id == user_id
    }

    /// Find an embedded comment by id
    pub fn comment(&self, comment_id: CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == comment_id)
    }

    #[inline]
    pub fn has_comment(&self, comment_id: CommentId) -> bool {
        self.comment(comment_id).is_some()
    }
}
