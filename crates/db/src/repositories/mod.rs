//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument. A missing row is reported
//! as `Option::None` or `false`; deciding what that means is left to the
//! caller.

pub mod category_repo;
pub mod comment_repo;
pub mod review_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use comment_repo::CommentRepo;
pub use review_repo::ReviewRepo;
pub use user_repo::UserRepo;
