use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A review or comment looked up by numeric id.
    #[error("No {entity} with that ID ({id})")]
    NotFound { entity: &'static str, id: DbId },

    #[error("No user with that username ({0})")]
    UserNotFound(String),

    #[error("No such category")]
    CategoryNotFound(String),

    /// A page past the last non-empty page was requested.
    #[error("No content found on page {page}")]
    PageOutOfRange { page: i64 },

    #[error("{0}")]
    Validation(String),
}
