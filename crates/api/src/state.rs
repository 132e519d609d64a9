/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted internally. The database
/// is the only state shared between requests.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: gamehub_db::DbPool,
}
