use gamehub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `reviews` table plus its derived `comment_count`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub review_id: DbId,
    pub title: String,
    pub category: String,
    pub designer: String,
    pub owner: String,
    pub review_body: String,
    pub review_img_url: String,
    pub created_at: Timestamp,
    pub votes: i32,
    pub comment_count: i32,
}

/// Listing row: a review plus the window count over the filtered set.
#[derive(Debug, FromRow)]
pub(crate) struct CountedReview {
    #[sqlx(flatten)]
    pub review: Review,
    pub total_count: i32,
}

/// DTO for `POST /api/reviews`.
///
/// `review_img_url` falls back to the column default when omitted. The other
/// fields are optional only so that omissions reach the database as NULL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateReview {
    pub owner: Option<String>,
    pub title: Option<String>,
    pub review_body: Option<String>,
    pub designer: Option<String>,
    pub category: Option<String>,
    pub review_img_url: Option<String>,
}

/// Body of a vote-increment PATCH, shared by reviews and comments.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct UpdateVotes {
    pub inc_votes: i32,
}
