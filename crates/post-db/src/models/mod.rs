//! Database models - SQLx-compatible structs for PostgreSQL tables

mod post;

pub use post::PostDocumentModel;
