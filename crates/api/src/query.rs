//! Query-string parameter types for listing endpoints.
//!
//! Every value is captured as a raw string so that malformed input is
//! reported by the validation rules in `gamehub_core::listing` with a
//! specific message, rather than as a generic deserialization failure.

use gamehub_core::error::CoreError;
use gamehub_core::listing::{Pagination, ReviewListQuery};
use serde::Deserialize;

/// Query parameters for `GET /api/reviews`.
#[derive(Debug, Default, Deserialize)]
pub struct ReviewListParams {
    pub category: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub limit: Option<String>,
    /// Also accepted as `p`.
    #[serde(alias = "p")]
    pub page: Option<String>,
}

impl ReviewListParams {
    pub fn validate(&self) -> Result<ReviewListQuery, CoreError> {
        ReviewListQuery::parse(
            self.category.as_deref(),
            self.sort_by.as_deref(),
            self.order.as_deref(),
            self.limit.as_deref(),
            self.page.as_deref(),
        )
    }
}

/// Generic pagination parameters (`?limit=&page=`).
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<String>,
    #[serde(alias = "p")]
    pub page: Option<String>,
}

impl PaginationParams {
    pub fn validate(&self) -> Result<Pagination, CoreError> {
        Pagination::parse(self.limit.as_deref(), self.page.as_deref())
    }
}
