//! Repository for the `todos` table.
//!
//! Every read except [`TodoRepo::find_by_id_include_deleted`] excludes
//! soft-deleted rows. All list orderings end with `id DESC` so rows created
//! in the same instant still come back in a stable order.

use sqlx::PgPool;
use todo_core::todo::{NewTodo, Priority, Todo};
use todo_core::types::DbId;

use crate::models::todo::TodoRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, completed, priority, due_date, created_at, updated_at";

/// SQL expression mapping the stored priority text to its numeric rank.
///
/// Generated from [`Priority::ALL`] so the database ordering always agrees
/// with [`Priority::rank`].
pub fn priority_rank_sql() -> String {
    let arms: String = Priority::ALL
        .iter()
        .map(|p| format!(" WHEN '{}' THEN {}", p.as_str(), p.rank()))
        .collect();
    format!("(CASE priority{arms} ELSE 0 END)")
}

fn into_todos(rows: Vec<TodoRow>) -> Result<Vec<Todo>, sqlx::Error> {
    rows.into_iter().map(Todo::try_from).collect()
}

/// Provides CRUD operations for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// Insert a new todo, returning the created row. `completed` takes its
    /// column default (`false`).
    pub async fn create(pool: &PgPool, input: &NewTodo) -> Result<Todo, sqlx::Error> {
        let query = format!(
            "INSERT INTO todos (title, description, priority, due_date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TodoRow>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.priority.as_str())
            .bind(input.due_date)
            .fetch_one(pool)
            .await?
            .try_into()
    }

    /// Find a todo by ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, TodoRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .map(Todo::try_from)
            .transpose()
    }

    /// Find a todo by ID, including soft-deleted rows.
    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = $1");
        sqlx::query_as::<_, TodoRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .map(Todo::try_from)
            .transpose()
    }

    /// List all todos, newest created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM todos
             WHERE deleted_at IS NULL
             ORDER BY created_at DESC, id DESC"
        );
        let rows = sqlx::query_as::<_, TodoRow>(&query).fetch_all(pool).await?;
        into_todos(rows)
    }

    /// List todos with the given priority, newest created first.
    pub async fn list_by_priority(
        pool: &PgPool,
        priority: Priority,
    ) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM todos
             WHERE deleted_at IS NULL AND priority = $1
             ORDER BY created_at DESC, id DESC"
        );
        let rows = sqlx::query_as::<_, TodoRow>(&query)
            .bind(priority.as_str())
            .fetch_all(pool)
            .await?;
        into_todos(rows)
    }

    /// List completed todos, most recently updated first.
    pub async fn list_completed(pool: &PgPool) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM todos
             WHERE deleted_at IS NULL AND completed = TRUE
             ORDER BY updated_at DESC, id DESC"
        );
        let rows = sqlx::query_as::<_, TodoRow>(&query).fetch_all(pool).await?;
        into_todos(rows)
    }

    /// List pending todos, highest priority rank first, then newest created.
    pub async fn list_pending(pool: &PgPool) -> Result<Vec<Todo>, sqlx::Error> {
        let rank = priority_rank_sql();
        let query = format!(
            "SELECT {COLUMNS} FROM todos
             WHERE deleted_at IS NULL AND completed = FALSE
             ORDER BY {rank} DESC, created_at DESC, id DESC"
        );
        let rows = sqlx::query_as::<_, TodoRow>(&query).fetch_all(pool).await?;
        into_todos(rows)
    }

    /// Overwrite every mutable column of a live todo and bump `updated_at`.
    ///
    /// Returns `None` if no live row with `todo.id` exists.
    pub async fn update(pool: &PgPool, todo: &Todo) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!(
            "UPDATE todos SET
                title = $2,
                description = $3,
                completed = $4,
                priority = $5,
                due_date = $6,
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TodoRow>(&query)
            .bind(todo.id)
            .bind(&todo.title)
            .bind(&todo.description)
            .bind(todo.completed)
            .bind(todo.priority.as_str())
            .bind(todo.due_date)
            .fetch_optional(pool)
            .await?
            .map(Todo::try_from)
            .transpose()
    }

    /// Soft-delete a todo by ID. Returns the number of rows marked deleted
    /// (`0` if it was missing or already deleted).
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result =
            sqlx::query("UPDATE todos SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected())
    }
}
