//! Post document model

use sqlx::types::Json;
use sqlx::FromRow;

/// A row of the `posts` table, reduced to its document column.
///
/// The document is fetched as untyped JSON so that decode failures surface
/// as domain decode errors rather than driver errors.
#[derive(Debug, Clone, FromRow)]
pub struct PostDocumentModel {
    pub doc: Json<serde_json::Value>,
}
