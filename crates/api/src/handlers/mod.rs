//! Request handlers, one submodule per resource.
//!
//! Handlers parse path and query parameters, delegate to the repositories in
//! `gamehub_db`, and turn absent rows into [`AppError`] values.

pub mod categories;
pub mod comments;
pub mod endpoints;
pub mod reviews;
pub mod users;

use gamehub_core::error::CoreError;
use gamehub_core::types::DbId;
use gamehub_db::models::review::Review;
use gamehub_db::repositories::ReviewRepo;

use crate::error::{AppError, AppResult};

/// Fallback for any path that matches no route.
pub async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}

/// Verify that a review exists, returning the full row.
pub(crate) async fn ensure_review_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Review> {
    ReviewRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| review_not_found(id))
}

pub(crate) fn review_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "review",
        id,
    })
}
