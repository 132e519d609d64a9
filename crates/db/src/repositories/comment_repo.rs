//! Repository for the `comments` table.

use gamehub_core::listing::Pagination;
use gamehub_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::{Comment, CountedComment, CreateComment};
use crate::models::page::ListPage;

/// Column list for `comments` queries.
const COLUMNS: &str = "comment_id, body, review_id, author, votes, created_at";

/// Provides listing and mutation operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// List one page of a review's comments, newest first.
    ///
    /// Does not check that the review exists; an unknown id yields an empty
    /// page.
    pub async fn list_for_review(
        pool: &PgPool,
        review_id: DbId,
        pagination: &Pagination,
    ) -> Result<ListPage<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}, (COUNT(*) OVER ())::INT AS total_count \
             FROM comments \
             WHERE review_id = $1 \
             ORDER BY created_at DESC \
             LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, CountedComment>(&query)
            .bind(review_id)
            .bind(pagination.limit)
            .bind(pagination.offset())
            .fetch_all(pool)
            .await?;

        Ok(ListPage::from_counted(rows, |row| {
            (row.comment, row.total_count)
        }))
    }

    /// Insert a comment on a review, returning the created row.
    pub async fn create(
        pool: &PgPool,
        review_id: DbId,
        input: &CreateComment,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (review_id, body, author) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(review_id)
            .bind(&input.comment)
            .bind(&input.username)
            .fetch_one(pool)
            .await
    }

    /// Add `delta` (possibly negative) to a comment's votes.
    ///
    /// Returns `None` if no comment with the given id exists.
    pub async fn increment_votes(
        pool: &PgPool,
        id: DbId,
        delta: i32,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!(
            "UPDATE comments SET votes = votes + $2 \
             WHERE comment_id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .bind(delta)
            .fetch_optional(pool)
            .await
    }

    /// Delete a comment by id.
    ///
    /// Returns `true` if a comment was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
