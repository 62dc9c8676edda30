//! In-process implementation of PostCollection
//!
//! Documents are kept as JSON in insertion order, so decode failures behave
//! the same way they do against a real document store. Every call takes the
//! lock once and completes its whole mutation under it.

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use tracing::instrument;

use post_core::{CollectionResult, Comment, CommentId, Post, PostCollection, PostId, UserId};

use crate::mappers::{decode_post, encode_post};

/// In-memory document collection
#[derive(Debug, Default)]
pub struct MemoryPostCollection {
    docs: RwLock<Vec<Value>>,
}

impl MemoryPostCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw document as-is, bypassing encoding
    pub fn insert_raw(&self, doc: Value) {
        self.docs.write().push(doc);
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.docs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.read().is_empty()
    }

    fn has_id(doc: &Value, id: &str) -> bool {
        doc.get("id").and_then(Value::as_str) == Some(id)
    }

    fn author_id(doc: &Value) -> Option<i64> {
        doc.get("author")?.get("id")?.as_i64()
    }

    fn owns_comment(doc: &Value, comment_id: &str, author: i64) -> bool {
        doc.get("comments")
            .and_then(Value::as_array)
            .is_some_and(|comments| {
                comments.iter().any(|c| {
                    c.get("id").and_then(Value::as_str) == Some(comment_id)
                        && Self::author_id(c) == Some(author)
                })
            })
    }

    /// Decode the first document with `id` that passes `filter`, let `update`
    /// mutate it, and write it back.
    ///
    /// `filter` sees the raw document, so a document that matches nothing is
    /// never decoded.
    fn find_one_and_update<P, F>(
        &self,
        id: PostId,
        filter: P,
        update: F,
    ) -> CollectionResult<Option<Post>>
    where
        P: Fn(&Value) -> bool,
        F: FnOnce(&mut Post),
    {
        let key = id.to_string();
        let mut docs = self.docs.write();
        let Some(slot) = docs
            .iter_mut()
            .find(|doc| Self::has_id(doc, &key) && filter(doc))
        else {
            return Ok(None);
        };

        let mut post = decode_post(slot.clone())?;
        update(&mut post);
        *slot = encode_post(&post)?;
        Ok(Some(post))
    }
}

#[async_trait]
impl PostCollection for MemoryPostCollection {
    #[instrument(skip(self))]
    async fn find_one_and_increment_views(&self, id: PostId) -> CollectionResult<Option<Post>> {
        self.find_one_and_update(id, |_| true, |post| post.views += 1)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> CollectionResult<Vec<Post>> {
        let docs = self.docs.read();
        docs.iter().cloned().map(decode_post).collect()
    }

    #[instrument(skip(self, post), fields(post_id = %post.id))]
    async fn insert_one(&self, post: &Post) -> CollectionResult<()> {
        let doc = encode_post(post)?;
        self.docs.write().push(doc);
        Ok(())
    }

    #[instrument(skip(self, post), fields(post_id = %post.id))]
    async fn replace_one(&self, post: &Post) -> CollectionResult<u64> {
        let key = post.id.to_string();
        let doc = encode_post(post)?;
        let mut docs = self.docs.write();

        match docs.iter_mut().find(|d| Self::has_id(d, &key)) {
            Some(slot) if *slot == doc => Ok(0),
            Some(slot) => {
                *slot = doc;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    #[instrument(skip(self))]
    async fn delete_one_owned(&self, id: PostId, author: UserId) -> CollectionResult<u64> {
        let key = id.to_string();
        let mut docs = self.docs.write();

        let position = docs
            .iter()
            .position(|d| Self::has_id(d, &key) && Self::author_id(d) == Some(author.into_inner()));
        match position {
            Some(index) => {
                docs.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    #[instrument(skip(self, comment), fields(comment_id = %comment.id))]
    async fn push_comment(&self, id: PostId, comment: &Comment) -> CollectionResult<Option<Post>> {
        self.find_one_and_update(id, |_| true, |post| post.comments.push(comment.clone()))
    }

    #[instrument(skip(self))]
    async fn pull_comment_owned(
        &self,
        id: PostId,
        comment_id: CommentId,
        author: UserId,
    ) -> CollectionResult<Option<Post>> {
        let key = comment_id.to_string();
        self.find_one_and_update(
            id,
            |doc| Self::owns_comment(doc, &key, author.into_inner()),
            // Drops every comment carrying the id, not only the owned one.
            |post| post.comments.retain(|c| c.id != comment_id),
        )
    }
}
