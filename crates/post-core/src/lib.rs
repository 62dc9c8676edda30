//! # post-core
//!
//! Domain layer for the post & vote store: the post document with its
//! embedded votes and comments, the vote ledger, listing filters, the
//! store's error taxonomy and the document collection port.
//! This crate has no dependencies on infrastructure (database, runtime).

pub mod entities;
pub mod error;
pub mod filters;
pub mod forms;
pub mod ledger;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Author, Comment, Post, PostKind, Vote, VoteValue};
pub use error::{CollectionError, CollectionResult, StoreError, StoreResult};
pub use filters::PostFilter;
pub use forms::{CommentForm, PostForm};
pub use ledger::{LedgerChange, LedgerError, VoteState};
pub use traits::PostCollection;
pub use value_objects::{CommentId, IdParseError, PostId, UserId};
