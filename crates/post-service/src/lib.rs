//! # post-service
//!
//! Application layer: the post store, which owns posts, their comments and
//! per-user votes, and translates storage failures into
//! [`StoreError`](post_core::StoreError).

pub mod services;

pub use services::{
    validate_form, ContextError, PostStore, StoreContext, StoreSettings,
};
