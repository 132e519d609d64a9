//! Handlers for `/api/categories`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use gamehub_db::models::category::CreateCategory;
use gamehub_db::repositories::CategoryRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::{CategoriesResponse, CategoryResponse};
use crate::state::AppState;

/// GET /api/categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list_all(&state.pool).await?;

    Ok(Json(CategoriesResponse { categories }))
}

/// POST /api/categories
///
/// Missing keys are rejected by the table's NOT NULL constraints; a
/// duplicate slug by its primary key.
pub async fn create_category(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryRepo::create(&state.pool, &input).await?;

    tracing::info!(slug = %category.slug, "Category created");

    Ok((StatusCode::CREATED, Json(CategoryResponse { category })))
}
