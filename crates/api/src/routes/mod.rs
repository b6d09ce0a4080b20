pub mod health;
pub mod todo;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /todos          list (?priority=, ?completed=), create
/// /todos/{id}     get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/todos", todo::router())
}
