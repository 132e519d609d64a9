//! Sorting and pagination rules for the review and comment collections.
//!
//! Query-string values arrive as raw strings and are validated here before
//! any SQL is built. Sort columns and directions cannot be bound as query
//! parameters, so both are restricted to closed enums whose SQL text is
//! fixed at compile time.

use crate::error::CoreError;
use crate::types::DbId;

/// Page size used when `limit` is omitted.
pub const DEFAULT_LIMIT: i64 = 10;

/// Page number used when `page` is omitted.
pub const DEFAULT_PAGE: i64 = 1;

/* --------------------------------------------------------------------------
   Path ids
   -------------------------------------------------------------------------- */

/// Parse a numeric path segment such as `review_id`.
///
/// `field` names the parameter in the error message.
pub fn parse_id(field: &str, raw: &str) -> Result<DbId, CoreError> {
    raw.parse::<DbId>()
        .map_err(|_| CoreError::Validation(format!("Incorrect datatype for {field}")))
}

/* --------------------------------------------------------------------------
   Sort order
   -------------------------------------------------------------------------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Accepts exactly `asc` or `desc`; matching is case-sensitive.
    pub fn parse(raw: Option<&str>) -> Result<Self, CoreError> {
        match non_empty(raw) {
            None => Ok(Self::default()),
            Some("asc") => Ok(Self::Asc),
            Some("desc") => Ok(Self::Desc),
            Some(_) => Err(CoreError::Validation(
                "Query order must be asc or desc".to_string(),
            )),
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/* --------------------------------------------------------------------------
   Review sort column
   -------------------------------------------------------------------------- */

/// Allow-listed `sort_by` values for the reviews listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewSortColumn {
    #[default]
    CreatedAt,
    Owner,
    Title,
    ReviewId,
    Category,
    ReviewImgUrl,
    Votes,
    Designer,
    CommentCount,
}

impl ReviewSortColumn {
    pub const ALL: [Self; 9] = [
        Self::CreatedAt,
        Self::Owner,
        Self::Title,
        Self::ReviewId,
        Self::Category,
        Self::ReviewImgUrl,
        Self::Votes,
        Self::Designer,
        Self::CommentCount,
    ];

    /// The query-string name of this column.
    pub fn name(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::Owner => "owner",
            Self::Title => "title",
            Self::ReviewId => "review_id",
            Self::Category => "category",
            Self::ReviewImgUrl => "review_img_url",
            Self::Votes => "votes",
            Self::Designer => "designer",
            Self::CommentCount => "comment_count",
        }
    }

    /// Column reference used in the `ORDER BY` clause.
    ///
    /// Review columns are table-qualified because `comments` also has
    /// `votes` and `created_at`. `comment_count` is the aggregate's alias.
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::CreatedAt => "reviews.created_at",
            Self::Owner => "reviews.owner",
            Self::Title => "reviews.title",
            Self::ReviewId => "reviews.review_id",
            Self::Category => "reviews.category",
            Self::ReviewImgUrl => "reviews.review_img_url",
            Self::Votes => "reviews.votes",
            Self::Designer => "reviews.designer",
            Self::CommentCount => "comment_count",
        }
    }

    pub fn parse(raw: Option<&str>) -> Result<Self, CoreError> {
        let Some(raw) = non_empty(raw) else {
            return Ok(Self::default());
        };
        Self::ALL
            .into_iter()
            .find(|col| col.name() == raw)
            .ok_or_else(|| CoreError::Validation("Invalid column to sort by".to_string()))
    }
}

/* --------------------------------------------------------------------------
   Pagination
   -------------------------------------------------------------------------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: i64,
    pub page: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            page: DEFAULT_PAGE,
        }
    }
}

impl Pagination {
    /// Parse `limit` and `page`, applying defaults for absent values.
    ///
    /// Both must be integers >= 1, and the resulting offset must fit in an
    /// `i64`.
    pub fn parse(limit: Option<&str>, page: Option<&str>) -> Result<Self, CoreError> {
        let limit = parse_positive(limit, DEFAULT_LIMIT, "limit")?;
        let page = parse_positive(page, DEFAULT_PAGE, "page")?;

        if limit.checked_mul(page - 1).is_none() {
            return Err(CoreError::Validation(
                "Query limit and page are too large".to_string(),
            ));
        }

        Ok(Self { limit, page })
    }

    /// Number of rows to skip: `limit * (page - 1)`.
    pub fn offset(&self) -> i64 {
        self.limit * (self.page - 1)
    }

    /// Reject an empty result on any page after the first.
    ///
    /// An empty first page is a valid (empty) collection.
    pub fn ensure_has_content(&self, rows: usize) -> Result<(), CoreError> {
        if rows == 0 && self.page > 1 {
            return Err(CoreError::PageOutOfRange { page: self.page });
        }
        Ok(())
    }
}

fn parse_positive(raw: Option<&str>, default: i64, name: &str) -> Result<i64, CoreError> {
    let Some(raw) = non_empty(raw) else {
        return Ok(default);
    };
    match raw.parse::<i64>() {
        Ok(value) if value >= 1 => Ok(value),
        _ => Err(CoreError::Validation(format!(
            "Query {name} must be a positive integer"
        ))),
    }
}

/// Empty query-string values (`?sort_by=`) are treated as absent.
fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.is_empty())
}

/* --------------------------------------------------------------------------
   Review listing
   -------------------------------------------------------------------------- */

/// Validated parameters for `GET /api/reviews`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReviewListQuery {
    /// Category slug to filter on.
    pub category: Option<String>,
    pub sort_by: ReviewSortColumn,
    pub order: SortOrder,
    pub pagination: Pagination,
}

impl ReviewListQuery {
    /// Validate raw query-string values in the order `sort_by`, `order`,
    /// `limit`, `page`. The first failure is returned.
    pub fn parse(
        category: Option<&str>,
        sort_by: Option<&str>,
        order: Option<&str>,
        limit: Option<&str>,
        page: Option<&str>,
    ) -> Result<Self, CoreError> {
        let sort_by = ReviewSortColumn::parse(sort_by)?;
        let order = SortOrder::parse(order)?;
        let pagination = Pagination::parse(limit, page)?;

        Ok(Self {
            category: non_empty(category).map(str::to_string),
            sort_by,
            order,
            pagination,
        })
    }
}
