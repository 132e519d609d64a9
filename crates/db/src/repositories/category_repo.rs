use sqlx::PgPool;

use crate::models::category::{Category, CreateCategory};

/// Column list for `categories` queries.
const COLUMNS: &str = "slug, description";

/// Provides read and insert operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List every category.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY slug");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Insert a category, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (slug, description) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.slug)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }
}
