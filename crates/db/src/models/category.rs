use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub slug: String,
    pub description: String,
}

/// DTO for `POST /api/categories`.
///
/// Fields are optional so that omissions reach the database and surface as
/// not-null violations.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCategory {
    pub slug: Option<String>,
    pub description: Option<String>,
}
