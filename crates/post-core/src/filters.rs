//! Listing filters applied to an already fetched collection

use crate::entities::Post;

/// Selection rule for post listings
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PostFilter {
    #[default]
    All,
    Category(String),
    Author(String),
}

impl PostFilter {
    pub fn all() -> Self {
        Self::All
    }

    pub fn by_category(category: impl Into<String>) -> Self {
        Self::Category(category.into())
    }

    /// Match on the author's username
    pub fn by_author(username: impl Into<String>) -> Self {
        Self::Author(username.into())
    }

    pub fn matches(&self, post: &Post) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => post.category == *category,
            Self::Author(username) => post.author.username == *username,
        }
    }

    /// Keep the posts this filter matches, preserving their order
    pub fn apply(&self, posts: Vec<Post>) -> Vec<Post> {
        posts.into_iter().filter(|p| self.matches(p)).collect()
    }
}
