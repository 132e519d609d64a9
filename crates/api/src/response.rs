//! Response envelope types for API handlers.
//!
//! Each endpoint wraps its payload in a single named key (`{ "review": ... }`,
//! `{ "reviews": [...], "total_count": n }`). These structs keep the key
//! names in one place instead of ad-hoc `serde_json::json!` bodies.

use gamehub_db::models::category::Category;
use gamehub_db::models::comment::Comment;
use gamehub_db::models::review::Review;
use gamehub_db::models::user::User;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
}

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub category: Category,
}

/// One page of reviews plus the size of the full filtered set.
#[derive(Debug, Serialize)]
pub struct ReviewsResponse {
    pub reviews: Vec<Review>,
    pub total_count: i32,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub review: Review,
}

/// One page of a review's comments plus the review's total comment count.
#[derive(Debug, Serialize)]
pub struct CommentsResponse {
    pub comments: Vec<Comment>,
    pub total_count: i32,
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub comment: Comment,
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct EndpointsResponse {
    pub endpoints: serde_json::Value,
}
