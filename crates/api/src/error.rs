use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gamehub_core::error::CoreError;
use serde_json::json;
use sqlx::postgres::PgDatabaseError;

/// Message for bodies that are not valid JSON or do not match the DTO.
pub const INVALID_BODY_MSG: &str = "Invalid request body";

/// Message for inserts rejected by a NOT NULL constraint.
pub const MISSING_KEYS_MSG: &str = "Invalid request body - missing necessary keys";

/// Message for paths that match no route.
pub const ROUTE_NOT_FOUND_MSG: &str = "Route not found!";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and `sqlx::Error` for raw database
/// failures, and adds HTTP-specific variants. Implements [`IntoResponse`]
/// to produce consistent `{ "msg", "code" }` JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `gamehub_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No route matched the request path.
    #[error("Route not found")]
    RouteNotFound,

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Rejected request body");
        AppError::BadRequest(INVALID_BODY_MSG.to_string())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Rejected query string");
        AppError::BadRequest("Invalid query string".to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { .. }
                | CoreError::UserNotFound(_)
                | CoreError::CategoryNotFound(_)
                | CoreError::PageOutOfRange { .. } => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", core.to_string())
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::RouteNotFound => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                ROUTE_NOT_FOUND_MSG.to_string(),
            ),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "msg": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// PostgreSQL SQLSTATEs handled:
/// - `22P02` invalid text representation, `22003` out of range: 400
/// - `23502` not-null violation: 400
/// - `23503` foreign-key violation: 404 naming the missing key
/// - `23505` unique violation: 409
///
/// Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some("22P02") | Some("22003") => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Incorrect datatype".to_string(),
            ),
            Some("23502") => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                MISSING_KEYS_MSG.to_string(),
            ),
            Some("23503") => {
                let subject = db_err
                    .try_downcast_ref::<PgDatabaseError>()
                    .and_then(|pg| pg.detail())
                    .and_then(missing_foreign_key)
                    .or(db_err.constraint())
                    .unwrap_or("referenced row");
                (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("No content found for {subject}"),
                )
            }
            Some("23505") => {
                let constraint = db_err.constraint().unwrap_or("unknown");
                (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Duplicate value violates unique constraint: {constraint}"),
                )
            }
            _ => {
                tracing::error!(error = %db_err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        },
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

/// Extract `(column)=(value)` from a foreign-key violation detail such as
/// `Key (author)=(notAUser) is not present in table "users".`
fn missing_foreign_key(detail: &str) -> Option<&str> {
    let rest = detail.strip_prefix("Key ")?;
    let end = rest.find(" is not present")?;
    Some(&rest[..end])
}
