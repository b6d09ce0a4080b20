//! Query parameter types for API handlers.

use serde::Deserialize;

/// Filters for `GET /todos` (`?priority=&completed=`).
///
/// `completed` is kept as a raw string so an unrecognised value can be
/// reported with a specific message instead of a generic rejection.
#[derive(Debug, Default, Deserialize)]
pub struct TodoListParams {
    pub priority: Option<String>,
    pub completed: Option<String>,
}
