//! Idempotent schema setup for the posts collection

use sqlx::PgPool;
use tracing::info;

const CREATE_POSTS: &str = r#"
    CREATE TABLE IF NOT EXISTS posts (
        id UUID PRIMARY KEY,
        seq BIGSERIAL NOT NULL,
        doc JSONB NOT NULL
    )
"#;

const CREATE_POSTS_SEQ_INDEX: &str = r#"
    CREATE INDEX IF NOT EXISTS posts_seq_idx ON posts (seq)
"#;

/// Create the `posts` table and its indexes if they do not exist
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_POSTS).execute(pool).await?;
    sqlx::query(CREATE_POSTS_SEQ_INDEX).execute(pool).await?;
    info!("posts schema ready");
    Ok(())
}
