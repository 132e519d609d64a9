//! Repository for the `reviews` table.
//!
//! Every read reports `comment_count`, computed with a left join against
//! `comments` so that reviews without comments count zero.

use gamehub_core::listing::ReviewListQuery;
use gamehub_core::types::DbId;
use sqlx::PgPool;

use crate::models::page::ListPage;
use crate::models::review::{CountedReview, CreateReview, Review};

/// Review columns, qualified for use alongside a join on `comments`.
const COLUMNS: &str = "\
    reviews.review_id, reviews.title, reviews.category, reviews.designer, \
    reviews.owner, reviews.review_body, reviews.review_img_url, \
    reviews.created_at, reviews.votes";

/// Review columns read back from a data-modifying CTE named `changed`.
const CHANGED_COLUMNS: &str = "\
    changed.review_id, changed.title, changed.category, changed.designer, \
    changed.owner, changed.review_body, changed.review_img_url, \
    changed.created_at, changed.votes";

/// Provides listing, lookup and mutation operations for reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// List one page of reviews, optionally filtered by category.
    ///
    /// `total_count` is a window count taken after grouping and before
    /// `LIMIT`/`OFFSET`, so it covers the whole filtered set. The sort column
    /// and direction come from closed enums and are safe to interpolate.
    pub async fn list(
        pool: &PgPool,
        params: &ReviewListQuery,
    ) -> Result<ListPage<Review>, sqlx::Error> {
        let order_clause = format!(
            "{} {}",
            params.sort_by.as_sql(),
            params.order.as_sql()
        );
        let limit = params.pagination.limit;
        let offset = params.pagination.offset();

        let rows = match &params.category {
            Some(category) => {
                let query = format!(
                    "SELECT {COLUMNS}, \
                            COUNT(comments.comment_id)::INT AS comment_count, \
                            (COUNT(*) OVER ())::INT AS total_count \
                     FROM reviews \
                     LEFT JOIN comments ON comments.review_id = reviews.review_id \
                     WHERE reviews.category = $1 \
                     GROUP BY reviews.review_id \
                     ORDER BY {order_clause} \
                     LIMIT $2 OFFSET $3"
                );
                sqlx::query_as::<_, CountedReview>(&query)
                    .bind(category)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await?
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS}, \
                            COUNT(comments.comment_id)::INT AS comment_count, \
                            (COUNT(*) OVER ())::INT AS total_count \
                     FROM reviews \
                     LEFT JOIN comments ON comments.review_id = reviews.review_id \
                     GROUP BY reviews.review_id \
                     ORDER BY {order_clause} \
                     LIMIT $1 OFFSET $2"
                );
                sqlx::query_as::<_, CountedReview>(&query)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await?
            }
        };

        tracing::debug!(
            rows = rows.len(),
            sort_by = params.sort_by.name(),
            order = params.order.as_sql(),
            "Review listing query",
        );

        Ok(ListPage::from_counted(rows, |row| {
            (row.review, row.total_count)
        }))
    }

    /// Find a review by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Review>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}, COUNT(comments.comment_id)::INT AS comment_count \
             FROM reviews \
             LEFT JOIN comments ON comments.review_id = reviews.review_id \
             WHERE reviews.review_id = $1 \
             GROUP BY reviews.review_id"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a review, returning the created row.
    ///
    /// Missing required fields and unknown owner/category are left to the
    /// database's not-null and foreign-key constraints.
    pub async fn create(pool: &PgPool, input: &CreateReview) -> Result<Review, sqlx::Error> {
        let insert = match input.review_img_url {
            Some(_) => {
                "INSERT INTO reviews \
                     (owner, title, review_body, designer, category, review_img_url) \
                 VALUES ($1, $2, $3, $4, $5, $6) \
                 RETURNING *"
            }
            None => {
                "INSERT INTO reviews (owner, title, review_body, designer, category) \
                 VALUES ($1, $2, $3, $4, $5) \
                 RETURNING *"
            }
        };
        let query = format!(
            "WITH changed AS ({insert}) \
             SELECT {CHANGED_COLUMNS}, 0::INT AS comment_count FROM changed"
        );

        let mut q = sqlx::query_as::<_, Review>(&query)
            .bind(&input.owner)
            .bind(&input.title)
            .bind(&input.review_body)
            .bind(&input.designer)
            .bind(&input.category);
        if let Some(url) = &input.review_img_url {
            q = q.bind(url);
        }
        q.fetch_one(pool).await
    }

    /// Add `delta` (possibly negative) to a review's votes.
    ///
    /// Returns `None` if no review with the given id exists.
    pub async fn increment_votes(
        pool: &PgPool,
        id: DbId,
        delta: i32,
    ) -> Result<Option<Review>, sqlx::Error> {
        let query = format!(
            "WITH changed AS ( \
                 UPDATE reviews SET votes = votes + $2 \
                 WHERE review_id = $1 \
                 RETURNING * \
             ) \
             SELECT {CHANGED_COLUMNS}, \
                    (SELECT COUNT(*) FROM comments \
                     WHERE comments.review_id = changed.review_id)::INT AS comment_count \
             FROM changed"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .bind(delta)
            .fetch_optional(pool)
            .await
    }

    /// Delete a review by id. Its comments are removed by the foreign key's
    /// `ON DELETE CASCADE`.
    ///
    /// Returns `true` if a review was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reviews WHERE review_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
