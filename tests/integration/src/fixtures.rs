//! Test fixtures and data generators

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::LazyLock;

use post_core::{Author, PostForm, PostId, UserId};

/// Counter for unique test identities
static COUNTER: AtomicI64 = AtomicI64::new(1_000);

/// Distinguishes names created by this test process from earlier runs
/// against the same database
static RUN_TAG: LazyLock<String> = LazyLock::new(|| PostId::generate().to_string()[..8].to_string());

/// Get a unique suffix for test data
pub fn unique_suffix() -> i64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A unique name with the given prefix
pub fn unique_name(prefix: &str) -> String {
    format!("{prefix}-{}-{}", *RUN_TAG, unique_suffix())
}

/// An author with a unique id and username
pub fn unique_author() -> Author {
    Author::new(UserId::new(unique_suffix()), unique_name("user"))
}

/// A text post form in a unique category
pub fn unique_text_form() -> PostForm {
    let name = unique_name("post");
    PostForm::text(
        format!("Title of {name}"),
        unique_name("category"),
        format!("Text of {name}"),
    )
}

/// A link post form
pub fn link_form(category: &str) -> PostForm {
    PostForm::link("A link", category, "https://example.com/article")
}
