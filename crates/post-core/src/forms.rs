//! Creation payloads - validated before they reach the store

use serde::Deserialize;
use validator::{Validate, ValidateUrl, ValidationError};

use crate::entities::PostKind;

/// New post payload
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[validate(schema(function = "validate_post_content"))]
pub struct PostForm {
    /// `text` or `link`. Other values pass validation and are rejected by the store.
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "type is required"))]
    pub kind: String,

    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,

    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    pub url: Option<String>,
}

impl PostForm {
    pub fn text(title: impl Into<String>, category: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: PostKind::Text.as_str().to_string(),
            title: title.into(),
            category: category.into(),
            text: Some(text.into()),
            url: None,
        }
    }

    pub fn link(title: impl Into<String>, category: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: PostKind::Link.as_str().to_string(),
            title: title.into(),
            category: category.into(),
            text: None,
            url: Some(url.into()),
        }
    }

    /// Body for a post of `kind`: the text of a text post, the url of a link post
    pub fn content(&self, kind: PostKind) -> String {
        match kind {
            PostKind::Text => self.text.clone(),
            PostKind::Link => self.url.clone(),
        }
        .unwrap_or_default()
    }
}

fn validate_post_content(form: &PostForm) -> Result<(), ValidationError> {
    match PostKind::parse(&form.kind) {
        Some(PostKind::Text) => match form.text.as_deref() {
            Some(text) if !text.trim().is_empty() => Ok(()),
            _ => Err(ValidationError::new("text_required")),
        },
        Some(PostKind::Link) => match form.url.as_deref() {
            Some(url) if url.validate_url() => Ok(()),
            _ => Err(ValidationError::new("url_required")),
        },
        None => Ok(()),
    }
}

/// New comment payload
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CommentForm {
    #[serde(rename = "comment")]
    #[validate(length(min = 1, message = "comment is required"))]
    pub body: String,
}

impl CommentForm {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}
