use axum::routing::get;
use axum::Router;

use crate::handlers::reviews;
use crate::state::AppState;

/// Review routes mounted at `/reviews`.
///
/// ```text
/// GET    /                          -> list_reviews
/// POST   /                          -> create_review
/// GET    /{review_id}               -> get_review
/// PATCH  /{review_id}               -> update_review_votes
/// DELETE /{review_id}               -> delete_review
/// GET    /{review_id}/comments      -> list_review_comments
/// POST   /{review_id}/comments      -> create_review_comment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(reviews::list_reviews).post(reviews::create_review),
        )
        .route(
            "/{review_id}",
            get(reviews::get_review)
                .patch(reviews::update_review_votes)
                .delete(reviews::delete_review),
        )
        .route(
            "/{review_id}/comments",
            get(reviews::list_review_comments).post(reviews::create_review_comment),
        )
}
