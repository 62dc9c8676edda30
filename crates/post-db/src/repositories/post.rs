//! PostgreSQL implementation of PostCollection

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::instrument;

use post_core::{CollectionResult, Comment, CommentId, Post, PostCollection, PostId, UserId};

use crate::models::PostDocumentModel;

use super::error::map_db_error;

/// PostgreSQL implementation of PostCollection
#[derive(Clone)]
pub struct PgPostCollection {
    pool: PgPool,
}

impl PgPostCollection {
    /// Create a new PgPostCollection
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn decode_optional(row: Option<PostDocumentModel>) -> CollectionResult<Option<Post>> {
        row.map(Post::try_from).transpose()
    }
}

#[async_trait]
impl PostCollection for PgPostCollection {
    #[instrument(skip(self))]
    async fn find_one_and_increment_views(&self, id: PostId) -> CollectionResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostDocumentModel>(
            r#"
            UPDATE posts
            SET doc = jsonb_set(doc, '{views}', to_jsonb(COALESCE((doc->>'views')::bigint, 0) + 1))
            WHERE id = $1
            RETURNING doc
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Self::decode_optional(row)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> CollectionResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostDocumentModel>(
            r#"
            SELECT doc
            FROM posts
            ORDER BY seq
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Post::try_from).collect()
    }

    #[instrument(skip(self, post), fields(post_id = %post.id))]
    async fn insert_one(&self, post: &Post) -> CollectionResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (id, doc)
            VALUES ($1, $2)
            "#,
        )
        .bind(post.id.into_inner())
        .bind(Json(post))
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, post), fields(post_id = %post.id))]
    async fn replace_one(&self, post: &Post) -> CollectionResult<u64> {
        // Identical documents count as not modified.
        let result = sqlx::query(
            r#"
            UPDATE posts
            SET doc = $2
            WHERE id = $1 AND doc IS DISTINCT FROM $2
            "#,
        )
        .bind(post.id.into_inner())
        .bind(Json(post))
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn delete_one_owned(&self, id: PostId, author: UserId) -> CollectionResult<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM posts
            WHERE id = $1 AND (doc->'author'->>'id')::bigint = $2
            "#,
        )
        .bind(id.into_inner())
        .bind(author.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self, comment), fields(comment_id = %comment.id))]
    async fn push_comment(&self, id: PostId, comment: &Comment) -> CollectionResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostDocumentModel>(
            r#"
            UPDATE posts
            SET doc = jsonb_set(
                doc,
                '{comments}',
                COALESCE(doc->'comments', '[]'::jsonb) || jsonb_build_array($2::jsonb)
            )
            WHERE id = $1
            RETURNING doc
            "#,
        )
        .bind(id.into_inner())
        .bind(Json(comment))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Self::decode_optional(row)
    }

    #[instrument(skip(self))]
    async fn pull_comment_owned(
        &self,
        id: PostId,
        comment_id: CommentId,
        author: UserId,
    ) -> CollectionResult<Option<Post>> {
        // The containment test matches the comment and its owner in the same statement.
        let row = sqlx::query_as::<_, PostDocumentModel>(
            r#"
            UPDATE posts
            SET doc = jsonb_set(
                doc,
                '{comments}',
                COALESCE(
                    (SELECT jsonb_agg(e.c ORDER BY e.ord)
                     FROM jsonb_array_elements(doc->'comments') WITH ORDINALITY AS e(c, ord)
                     WHERE e.c->>'id' <> $2),
                    '[]'::jsonb
                )
            )
            WHERE id = $1
              AND doc->'comments' @> jsonb_build_array(
                    jsonb_build_object('id', $2::text, 'author', jsonb_build_object('id', $3::bigint))
                  )
            RETURNING doc
            "#,
        )
        .bind(id.into_inner())
        .bind(comment_id.to_string())
        .bind(author.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Self::decode_optional(row)
    }
}
