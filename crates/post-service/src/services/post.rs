//! Post store
//!
//! Create, read, list, delete, vote and comment operations over a
//! [`PostCollection`]. Every storage call is bounded by the configured
//! timeout and every failure is surfaced once as a [`StoreError`]; nothing
//! is retried.
//!
//! Voting is a read followed by an unconditional replace of the whole
//! document. Two voters racing on the same post can overwrite each other
//! (last writer wins). Comment and ownership-checked mutations are single
//! atomic collection calls.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use post_common::StoreConfig;
use post_core::{
    Author, CollectionError, CollectionResult, Comment, CommentId, Post, PostCollection,
    PostFilter, PostForm, PostId, PostKind, StoreError, StoreResult, UserId, VoteValue,
};
use tracing::{error, info, instrument, warn};

/// Post store settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreSettings {
    /// Upper bound for every storage call
    pub timeout: Duration,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
        }
    }
}

impl From<&StoreConfig> for StoreSettings {
    fn from(config: &StoreConfig) -> Self {
        Self {
            timeout: config.timeout(),
        }
    }
}

/// Post store
#[derive(Clone)]
pub struct PostStore {
    collection: Arc<dyn PostCollection>,
    settings: StoreSettings,
}

impl PostStore {
    /// Create a store with default settings
    pub fn new(collection: Arc<dyn PostCollection>) -> Self {
        Self::with_settings(collection, StoreSettings::default())
    }

    pub fn with_settings(collection: Arc<dyn PostCollection>, settings: StoreSettings) -> Self {
        Self {
            collection,
            settings,
        }
    }

    pub fn settings(&self) -> StoreSettings {
        self.settings
    }

    /// Run one storage call under the store timeout
    async fn timed<T, F>(&self, op: &'static str, call: F) -> CollectionResult<T>
    where
        F: Future<Output = CollectionResult<T>>,
    {
        if let Ok(result) = tokio::time::timeout(self.settings.timeout, call).await {
            result
        } else {
            warn!(op, timeout = ?self.settings.timeout, "storage call timed out");
            Err(CollectionError::transport(format!("{op} timed out")))
        }
    }

    // =========================================================================
    // Read path
    // =========================================================================

    /// Fetch a post, counting the read as a view.
    ///
    /// Returns the post after its view counter was incremented.
    #[instrument(skip(self))]
    pub async fn get_post(&self, id: PostId) -> StoreResult<Post> {
        match self
            .timed("find_one_and_increment_views", self.collection.find_one_and_increment_views(id))
            .await
        {
            Ok(Some(post)) => Ok(post),
            Ok(None) => Err(StoreError::NotFound),
            Err(e) => {
                error!(post_id = %id, error = %e, "failed to fetch post");
                Err(StoreError::NotFound)
            }
        }
    }

    /// List posts matching `filter`, in storage order
    #[instrument(skip(self))]
    pub async fn list_posts(&self, filter: &PostFilter) -> StoreResult<Vec<Post>> {
        match self.timed("find_all", self.collection.find_all()).await {
            Ok(posts) => Ok(filter.apply(posts)),
            Err(e) if e.is_decode() => {
                error!(error = %e, "stored post could not be decoded");
                Err(StoreError::ConversionError)
            }
            Err(e) => {
                error!(error = %e, "failed to fetch posts");
                Err(StoreError::NotFound)
            }
        }
    }

    // =========================================================================
    // Votes
    // =========================================================================

    /// Record `value` as `user_id`'s vote on the post.
    ///
    /// Repeating the current vote returns the post without writing it.
    #[instrument(skip(self))]
    pub async fn vote_post(&self, id: PostId, user_id: UserId, value: VoteValue) -> StoreResult<Post> {
        let mut post = self.get_post(id).await?;

        if !post.apply_vote(user_id, value).is_changed() {
            return Ok(post);
        }

        match self.timed("replace_one", self.collection.replace_one(&post)).await {
            Ok(0) => {
                warn!(post_id = %id, user_id = %user_id, "vote replaced nothing");
                Err(StoreError::FailedUpdate)
            }
            Ok(_) => {
                info!(
                    post_id = %id,
                    user_id = %user_id,
                    vote = value.value(),
                    score = post.score,
                    "Vote recorded"
                );
                Ok(post)
            }
            Err(e) => {
                error!(post_id = %id, error = %e, "failed to store vote");
                Err(StoreError::BadRequest)
            }
        }
    }

    pub async fn upvote_post(&self, id: PostId, user_id: UserId) -> StoreResult<Post> {
        self.vote_post(id, user_id, VoteValue::Up).await
    }

    pub async fn downvote_post(&self, id: PostId, user_id: UserId) -> StoreResult<Post> {
        self.vote_post(id, user_id, VoteValue::Down).await
    }

    /// Withdraw `user_id`'s vote from the post
    #[instrument(skip(self))]
    pub async fn unvote_post(&self, id: PostId, user_id: UserId) -> StoreResult<Post> {
        let mut post = self.get_post(id).await?;

        if let Err(e) = post.remove_vote(user_id) {
            warn!(post_id = %id, error = %e, "nothing to unvote");
            return Err(StoreError::FailedUpdate);
        }

        match self.timed("replace_one", self.collection.replace_one(&post)).await {
            Ok(0) => {
                warn!(post_id = %id, user_id = %user_id, "unvote replaced nothing");
                Err(StoreError::FailedUpdate)
            }
            Ok(_) => {
                info!(post_id = %id, user_id = %user_id, score = post.score, "Vote withdrawn");
                Ok(post)
            }
            Err(e) => {
                error!(post_id = %id, error = %e, "failed to store unvote");
                Err(StoreError::FailedUpdate)
            }
        }
    }

    // =========================================================================
    // Create / delete
    // =========================================================================

    /// Create a post authored by `author`, with the author's own upvote
    #[instrument(skip(self, form), fields(kind = %form.kind))]
    pub async fn make_post(&self, form: &PostForm, author: Author) -> StoreResult<Post> {
        let Some(kind) = PostKind::parse(&form.kind) else {
            warn!(kind = %form.kind, "unsupported post type");
            return Err(StoreError::BadRequest);
        };

        let post = Post::new(
            kind,
            form.title.clone(),
            form.category.clone(),
            form.content(kind),
            author,
        );

        if let Err(e) = self.timed("insert_one", self.collection.insert_one(&post)).await {
            error!(error = %e, "failed to insert post");
            return Err(StoreError::BadRequest);
        }

        info!(post_id = %post.id, author_id = %post.author.id, "Post created");
        Ok(post)
    }

    /// Delete a post; only its author can.
    ///
    /// Returns `true` once the deletion is confirmed.
    #[instrument(skip(self))]
    pub async fn delete_post(&self, id: PostId, user_id: UserId) -> StoreResult<bool> {
        match self
            .timed("delete_one_owned", self.collection.delete_one_owned(id, user_id))
            .await
        {
            Ok(0) => {
                warn!(post_id = %id, user_id = %user_id, "no post deleted (missing or not the author)");
                Err(StoreError::FailedDelete)
            }
            Ok(_) => {
                info!(post_id = %id, user_id = %user_id, "Post deleted");
                Ok(true)
            }
            Err(e) => {
                error!(post_id = %id, error = %e, "failed to delete post");
                Err(StoreError::BadRequest)
            }
        }
    }

    // =========================================================================
    // Comments
    // =========================================================================

    /// Append a comment and return the post as it is after the append
    #[instrument(skip(self, body))]
    pub async fn make_comment(&self, id: PostId, body: String, author: Author) -> StoreResult<Post> {
        let comment = Comment::new(author, body);

        match self
            .timed("push_comment", self.collection.push_comment(id, &comment))
            .await
        {
            Ok(Some(post)) => {
                info!(post_id = %id, comment_id = %comment.id, "Comment added");
                Ok(post)
            }
            Ok(None) => {
                warn!(post_id = %id, "comment target not found");
                Err(StoreError::BadRequest)
            }
            Err(e) => {
                error!(post_id = %id, error = %e, "failed to add comment");
                Err(StoreError::BadRequest)
            }
        }
    }

    /// Remove a comment; only its author can.
    ///
    /// Returns the post as it is after the removal.
    #[instrument(skip(self))]
    pub async fn delete_comment(
        &self,
        id: PostId,
        comment_id: CommentId,
        user_id: UserId,
    ) -> StoreResult<Post> {
        match self
            .timed(
                "pull_comment_owned",
                self.collection.pull_comment_owned(id, comment_id, user_id),
            )
            .await
        {
            Ok(Some(post)) => {
                info!(post_id = %id, comment_id = %comment_id, "Comment deleted");
                Ok(post)
            }
            Ok(None) => {
                warn!(
                    post_id = %id,
                    comment_id = %comment_id,
                    user_id = %user_id,
                    "no comment removed (missing or not the author)"
                );
                Err(StoreError::FailedUpdate)
            }
            Err(e) if e.is_decode() => {
                error!(post_id = %id, error = %e, "updated post could not be decoded");
                Err(StoreError::BadRequest)
            }
            Err(e) => {
                error!(post_id = %id, error = %e, "failed to delete comment");
                Err(StoreError::FailedUpdate)
            }
        }
    }
}

impl std::fmt::Debug for PostStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostStore")
            .field("collection", &"dyn PostCollection")
            .field("settings", &self.settings)
            .finish()
    }
}
