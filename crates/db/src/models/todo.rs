//! Raw `todos` row.

use sqlx::FromRow;
use todo_core::todo::{Priority, Todo};
use todo_core::types::{DbId, Timestamp};

/// A row from the `todos` table as stored. `priority` is kept as text until
/// converted to [`Todo`].
#[derive(Debug, Clone, FromRow)]
pub struct TodoRow {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub priority: String,
    pub due_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<TodoRow> for Todo {
    type Error = sqlx::Error;

    /// Fails with [`sqlx::Error::Decode`] if the stored priority is not a
    /// known member.
    fn try_from(row: TodoRow) -> Result<Self, Self::Error> {
        let priority =
            Priority::parse(&row.priority).map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
        Ok(Todo {
            id: row.id,
            title: row.title,
            description: row.description,
            completed: row.completed,
            priority,
            due_date: row.due_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
