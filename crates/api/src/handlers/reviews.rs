//! Handlers for `/api/reviews` and the comments nested under a review.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use gamehub_core::error::CoreError;
use gamehub_core::listing::parse_id;
use gamehub_db::models::comment::CreateComment;
use gamehub_db::models::review::{CreateReview, UpdateVotes};
use gamehub_db::repositories::{CategoryRepo, CommentRepo, ReviewRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::handlers::{ensure_review_exists, review_not_found};
use crate::query::{PaginationParams, ReviewListParams};
use crate::response::{CommentResponse, CommentsResponse, ReviewResponse, ReviewsResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Whether `slug` names a known category. No filter counts as known.
async fn category_is_known(pool: &PgPool, slug: Option<&str>) -> Result<bool, sqlx::Error> {
    let Some(slug) = slug else {
        return Ok(true);
    };
    let categories = CategoryRepo::list_all(pool).await?;
    Ok(categories.iter().any(|c| c.slug == slug))
}

// ---------------------------------------------------------------------------
// Reviews
// ---------------------------------------------------------------------------

/// GET /api/reviews
///
/// Parameters are validated before any query runs. The page and the
/// category check are fetched concurrently; an unknown category is
/// reported before an empty page.
pub async fn list_reviews(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ReviewListParams>,
) -> AppResult<impl IntoResponse> {
    let query = params.validate()?;

    let (page, known) = tokio::try_join!(
        ReviewRepo::list(&state.pool, &query),
        category_is_known(&state.pool, query.category.as_deref()),
    )?;

    if !known {
        return Err(AppError::Core(CoreError::CategoryNotFound(
            query.category.unwrap_or_default(),
        )));
    }
    query.pagination.ensure_has_content(page.items.len())?;

    Ok(Json(ReviewsResponse {
        reviews: page.items,
        total_count: page.total_count,
    }))
}

/// GET /api/reviews/{review_id}
pub async fn get_review(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let review_id = parse_id("review_id", &review_id)?;
    let review = ensure_review_exists(&state.pool, review_id).await?;

    Ok(Json(ReviewResponse { review }))
}

/// POST /api/reviews
///
/// `review_img_url` is optional. Missing keys and unknown owner or category
/// are reported by the database constraints.
pub async fn create_review(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateReview>,
) -> AppResult<impl IntoResponse> {
    let review = ReviewRepo::create(&state.pool, &input).await?;

    tracing::info!(review_id = review.review_id, owner = %review.owner, "Review created");

    Ok((StatusCode::CREATED, Json(ReviewResponse { review })))
}

/// PATCH /api/reviews/{review_id}
///
/// Body: `{ "inc_votes": n }`. Votes may go negative.
pub async fn update_review_votes(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
    AppJson(input): AppJson<UpdateVotes>,
) -> AppResult<impl IntoResponse> {
    let review_id = parse_id("review_id", &review_id)?;
    let review = ReviewRepo::increment_votes(&state.pool, review_id, input.inc_votes)
        .await?
        .ok_or_else(|| review_not_found(review_id))?;

    tracing::info!(
        review_id,
        inc_votes = input.inc_votes,
        votes = review.votes,
        "Review votes updated",
    );

    Ok(Json(ReviewResponse { review }))
}

/// DELETE /api/reviews/{review_id}
pub async fn delete_review(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let review_id = parse_id("review_id", &review_id)?;
    let deleted = ReviewRepo::delete(&state.pool, review_id).await?;

    if !deleted {
        return Err(review_not_found(review_id));
    }

    tracing::info!(review_id, "Review deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Comments nested under a review
// ---------------------------------------------------------------------------

/// GET /api/reviews/{review_id}/comments
///
/// A known review with no comments yields an empty list; an unknown review
/// yields 404.
pub async fn list_review_comments(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
    AppQuery(params): AppQuery<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let review_id = parse_id("review_id", &review_id)?;
    let pagination = params.validate()?;

    let (page, review) = tokio::try_join!(
        CommentRepo::list_for_review(&state.pool, review_id, &pagination),
        ReviewRepo::find_by_id(&state.pool, review_id),
    )?;

    if review.is_none() {
        return Err(review_not_found(review_id));
    }
    pagination.ensure_has_content(page.items.len())?;

    Ok(Json(CommentsResponse {
        comments: page.items,
        total_count: page.total_count,
    }))
}

/// POST /api/reviews/{review_id}/comments
///
/// Body: `{ "username": ..., "comment": ... }` (`body` is accepted for
/// `comment`). An unknown author is reported by the foreign key.
pub async fn create_review_comment(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
    AppJson(input): AppJson<CreateComment>,
) -> AppResult<impl IntoResponse> {
    let review_id = parse_id("review_id", &review_id)?;
    ensure_review_exists(&state.pool, review_id).await?;

    let comment = CommentRepo::create(&state.pool, review_id, &input).await?;

    tracing::info!(
        review_id,
        comment_id = comment.comment_id,
        author = %comment.author,
        "Comment created",
    );

    Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
}
