use gamehub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub comment_id: DbId,
    pub body: String,
    pub review_id: DbId,
    pub author: String,
    pub votes: i32,
    pub created_at: Timestamp,
}

#[derive(Debug, FromRow)]
pub(crate) struct CountedComment {
    #[sqlx(flatten)]
    pub comment: Comment,
    pub total_count: i32,
}

/// DTO for `POST /api/reviews/{review_id}/comments`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateComment {
    pub username: Option<String>,
    #[serde(alias = "body")]
    pub comment: Option<String>,
}
