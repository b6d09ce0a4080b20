//! PostgreSQL persistence for todos.
//!
//! Pool construction, health check, embedded migrations, the `todos`
//! repository, and [`PgTodoStore`], the [`todo_core::todo_service::TodoStore`]
//! implementation the API injects into the domain service.

use sqlx::postgres::PgPoolOptions;

pub mod config;
pub mod models;
pub mod repositories;
pub mod store;

pub use config::DatabaseConfig;
pub use store::PgTodoStore;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from the database configuration.
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    tracing::debug!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Opening database pool"
    );
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect(&config.url)
        .await
}

/// Verify the database is reachable with a trivial round trip.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
