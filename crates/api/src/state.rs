use std::sync::Arc;

use todo_core::todo_service::TodoService;
use todo_db::PgTodoStore;

use crate::config::ServerConfig;

/// Todo service wired to the Postgres store.
pub type AppTodoService = TodoService<PgTodoStore>;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is reference-counted, config is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used directly by health checks.
    pub pool: todo_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Domain service for todos.
    pub todos: AppTodoService,
}

impl AppState {
    /// Build state around a pool, injecting the pool-backed store into the
    /// todo service.
    pub fn new(pool: todo_db::DbPool, config: ServerConfig) -> Self {
        let todos = TodoService::new(PgTodoStore::new(pool.clone()));
        Self {
            pool,
            config: Arc::new(config),
            todos,
        }
    }
}
