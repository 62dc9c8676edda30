//! Document collection port
//!
//! The store never locks anything itself. Each method here is a single
//! storage call, and implementations must make each one atomic for the
//! document it touches. Ownership checks are part of the match predicate
//! of the call, not a separate read.

use async_trait::async_trait;

use crate::entities::{Comment, Post};
use crate::error::CollectionResult;
use crate::value_objects::{CommentId, PostId, UserId};

#[async_trait]
pub trait PostCollection: Send + Sync {
    /// Increment `views` by one and return the post after the increment
    async fn find_one_and_increment_views(&self, id: PostId) -> CollectionResult<Option<Post>>;

    /// Every stored post, in storage order
    async fn find_all(&self) -> CollectionResult<Vec<Post>>;

    /// Insert a new post
    async fn insert_one(&self, post: &Post) -> CollectionResult<()>;

    /// Overwrite the document with `post.id` unconditionally.
    ///
    /// Returns the number of documents modified (0 or 1).
    async fn replace_one(&self, post: &Post) -> CollectionResult<u64>;

    /// Delete the post matching both `id` and `author.id == author`.
    ///
    /// Returns the number of documents deleted (0 or 1).
    async fn delete_one_owned(&self, id: PostId, author: UserId) -> CollectionResult<u64>;

    /// Append a comment and return the post after the append
    async fn push_comment(&self, id: PostId, comment: &Comment) -> CollectionResult<Option<Post>>;

    /// Remove the comment matching both `comment_id` and `author.id == author`
    /// from post `id`, returning the post after removal. `None` when nothing matched.
    async fn pull_comment_owned(
        &self,
        id: PostId,
        comment_id: CommentId,
        author: UserId,
    ) -> CollectionResult<Option<Post>>;
}
