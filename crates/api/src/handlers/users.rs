//! Handlers for `/api/users`.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use gamehub_core::error::CoreError;
use gamehub_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::response::{UserResponse, UsersResponse};
use crate::state::AppState;

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let users = UserRepo::list_all(&state.pool).await?;

    Ok(Json(UsersResponse { users }))
}

/// GET /api/users/{username}
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_username(&state.pool, &username)
        .await?
        .ok_or(AppError::Core(CoreError::UserNotFound(username)))?;

    Ok(Json(UserResponse { user }))
}
