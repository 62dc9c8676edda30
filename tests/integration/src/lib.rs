//! Integration test utilities for the post store
//!
//! Builds stores over the in-process collection or, when `DATABASE_URL` is
//! set, over PostgreSQL, and provides reusable fixtures.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
