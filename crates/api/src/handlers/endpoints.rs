//! `GET /api`: a static description of every endpoint.

use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::response::EndpointsResponse;

/// The endpoint document, compiled into the binary.
pub const ENDPOINTS_JSON: &str = include_str!("../../endpoints.json");

/// GET /api
pub async fn get_endpoints() -> AppResult<impl IntoResponse> {
    let endpoints: serde_json::Value = serde_json::from_str(ENDPOINTS_JSON)
        .map_err(|e| AppError::InternalError(format!("Malformed endpoints document: {e}")))?;

    Ok(Json(EndpointsResponse { endpoints }))
}
