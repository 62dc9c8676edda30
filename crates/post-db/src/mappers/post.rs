//! Post document <-> entity mapper

use post_core::{CollectionError, CollectionResult, Post};

use crate::models::PostDocumentModel;

/// Decode a stored JSON document into a post
pub fn decode_post(doc: serde_json::Value) -> CollectionResult<Post> {
    serde_json::from_value(doc).map_err(|e| CollectionError::decode(e.to_string()))
}

/// Encode a post into its stored JSON form
pub fn encode_post(post: &Post) -> CollectionResult<serde_json::Value> {
    serde_json::to_value(post).map_err(|e| CollectionError::Encode(e.to_string()))
}

impl TryFrom<PostDocumentModel> for Post {
    type Error = CollectionError;

    fn try_from(model: PostDocumentModel) -> Result<Self, Self::Error> {
        decode_post(model.doc.0)
    }
}
