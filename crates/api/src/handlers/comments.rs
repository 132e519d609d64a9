//! Handlers for `/api/comments`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use gamehub_core::error::CoreError;
use gamehub_core::listing::parse_id;
use gamehub_core::types::DbId;
use gamehub_db::models::review::UpdateVotes;
use gamehub_db::repositories::CommentRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::CommentResponse;
use crate::state::AppState;

fn comment_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "comment",
        id,
    })
}

/// PATCH /api/comments/{comment_id}
///
/// Body: `{ "inc_votes": n }`.
pub async fn update_comment_votes(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
    AppJson(input): AppJson<UpdateVotes>,
) -> AppResult<impl IntoResponse> {
    let comment_id = parse_id("comment_id", &comment_id)?;
    let comment = CommentRepo::increment_votes(&state.pool, comment_id, input.inc_votes)
        .await?
        .ok_or_else(|| comment_not_found(comment_id))?;

    tracing::info!(comment_id, inc_votes = input.inc_votes, "Comment votes updated");

    Ok(Json(CommentResponse { comment }))
}

/// DELETE /api/comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let comment_id = parse_id("comment_id", &comment_id)?;
    let deleted = CommentRepo::delete(&state.pool, comment_id).await?;

    if !deleted {
        return Err(comment_not_found(comment_id));
    }

    tracing::info!(comment_id, "Comment deleted");

    Ok(StatusCode::NO_CONTENT)
}
