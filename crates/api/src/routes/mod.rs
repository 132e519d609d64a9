pub mod categories;
pub mod comments;
pub mod health;
pub mod reviews;
pub mod users;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                     endpoint description document
///
/// /categories                           list, create
///
/// /reviews                              list (filter, sort, paginate), create
/// /reviews/{review_id}                  get, patch votes, delete
/// /reviews/{review_id}/comments         list (paginate), create
///
/// /comments/{comment_id}                patch votes, delete
///
/// /users                                list
/// /users/{username}                     get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::endpoints::get_endpoints))
        .nest("/categories", categories::router())
        .nest("/reviews", reviews::router())
        .nest("/comments", comments::router())
        .nest("/users", users::router())
}
