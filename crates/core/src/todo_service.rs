//! Todo domain service and the persistence contract it depends on.
//!
//! [`TodoService`] is the only place that applies the default-priority,
//! partial-update, and soft-delete rules. It owns an injected [`TodoStore`]
//! and wraps every store failure in [`CoreError::Store`] with an
//! operation-specific message.

use std::future::Future;

use crate::error::CoreError;
use crate::todo::{resolve_priority, CreateTodo, NewTodo, Priority, Todo, UpdateTodo, TODO_ENTITY};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Store contract
// ---------------------------------------------------------------------------

/// Row selection for [`TodoStore::list`]. Each variant fixes its ordering;
/// all orderings end with `id DESC` as a tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoFilter {
    /// Every live todo, newest created first.
    All,
    /// Live todos with the given priority, newest created first.
    Priority(Priority),
    /// Completed live todos, most recently updated first.
    Completed,
    /// Incomplete live todos, highest [`Priority::rank`] first, then newest
    /// created first.
    Pending,
}

/// Persistence operations the service needs. Every read excludes
/// soft-deleted rows unless the method name says otherwise.
pub trait TodoStore: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    fn list(
        &self,
        filter: TodoFilter,
    ) -> impl Future<Output = Result<Vec<Todo>, Self::Error>> + Send;

    fn find_by_id(
        &self,
        id: DbId,
    ) -> impl Future<Output = Result<Option<Todo>, Self::Error>> + Send;

    /// Like [`find_by_id`](Self::find_by_id) but also returns soft-deleted rows.
    fn find_by_id_include_deleted(
        &self,
        id: DbId,
    ) -> impl Future<Output = Result<Option<Todo>, Self::Error>> + Send;

    /// Insert a new row. The store assigns `id`, `created_at`, `updated_at`.
    fn insert(&self, todo: &NewTodo) -> impl Future<Output = Result<Todo, Self::Error>> + Send;

    /// Overwrite every mutable column of the live row `todo.id` and refresh
    /// `updated_at`. Returns `None` if no live row matched.
    fn update(
        &self,
        todo: &Todo,
    ) -> impl Future<Output = Result<Option<Todo>, Self::Error>> + Send;

    /// Mark a live row deleted. Returns the number of rows affected.
    fn soft_delete(&self, id: DbId) -> impl Future<Output = Result<u64, Self::Error>> + Send;
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// Business rules for todo items.
#[derive(Debug, Clone)]
pub struct TodoService<S> {
    store: S,
}

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: TODO_ENTITY,
        id,
    }
}

fn already_deleted(id: DbId) -> CoreError {
    CoreError::AlreadyDeleted {
        entity: TODO_ENTITY,
        id,
    }
}

fn store_error<E>(context: String, err: E) -> CoreError
where
    E: std::error::Error + Send + Sync + 'static,
{
    tracing::error!(error = %err, "{context}");
    CoreError::store(context, err)
}

impl<S: TodoStore> TodoService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All live todos, newest created first.
    pub async fn list_all(&self) -> Result<Vec<Todo>, CoreError> {
        self.store
            .list(TodoFilter::All)
            .await
            .map_err(|e| store_error("Failed to list todos".to_string(), e))
    }

    pub async fn get_by_id(&self, id: DbId) -> Result<Todo, CoreError> {
        self.store
            .find_by_id(id)
            .await
            .map_err(|e| store_error(format!("Failed to fetch todo {id}"), e))?
            .ok_or_else(|| not_found(id))
    }

    /// Create a todo. An absent or empty priority defaults to `medium`.
    pub async fn create(&self, input: &CreateTodo) -> Result<Todo, CoreError> {
        let priority = resolve_priority(input.priority.as_deref())?;

        let new_todo = NewTodo {
            title: input.title.clone(),
            description: input.description.clone(),
            priority,
            due_date: input.due_date,
        };

        let todo = self
            .store
            .insert(&new_todo)
            .await
            .map_err(|e| store_error("Failed to create todo".to_string(), e))?;

        tracing::info!(todo_id = todo.id, priority = %todo.priority, "Todo created");
        Ok(todo)
    }

    /// Apply the fields present in `input` to the live todo `id`.
    ///
    /// Priority is validated before anything is written, so an invalid value
    /// leaves the row untouched.
    pub async fn update(&self, id: DbId, input: &UpdateTodo) -> Result<Todo, CoreError> {
        let mut todo = self.get_by_id(id).await?;

        if let Some(title) = &input.title {
            todo.title = title.clone();
        }
        if let Some(description) = &input.description {
            todo.description = description.clone();
        }
        if let Some(completed) = input.completed {
            todo.completed = completed;
        }
        if let Some(priority) = &input.priority {
            todo.priority = Priority::parse(priority)?;
        }
        if let Some(due_date) = input.due_date {
            todo.due_date = Some(due_date);
        }

        let updated = self
            .store
            .update(&todo)
            .await
            .map_err(|e| store_error(format!("Failed to update todo {id}"), e))?
            // Soft-deleted between the fetch and the write.
            .ok_or_else(|| not_found(id))?;

        tracing::info!(todo_id = id, "Todo updated");
        Ok(updated)
    }

    /// Soft-delete the todo `id`.
    ///
    /// Returns `AlreadyDeleted` when the row exists but is already
    /// soft-deleted, including when a concurrent delete wins the race.
    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        let live = self
            .store
            .find_by_id(id)
            .await
            .map_err(|e| store_error(format!("Failed to fetch todo {id}"), e))?;

        if live.is_none() {
            let any = self
                .store
                .find_by_id_include_deleted(id)
                .await
                .map_err(|e| store_error(format!("Failed to fetch todo {id}"), e))?;
            return Err(match any {
                Some(_) => already_deleted(id),
                None => not_found(id),
            });
        }

        let affected = self
            .store
            .soft_delete(id)
            .await
            .map_err(|e| store_error(format!("Failed to delete todo {id}"), e))?;

        if affected == 0 {
            tracing::warn!(todo_id = id, "Todo deleted concurrently");
            return Err(already_deleted(id));
        }

        tracing::info!(todo_id = id, "Todo soft-deleted");
        Ok(())
    }

    /// Live todos with the given priority, newest created first.
    pub async fn list_by_priority(&self, priority: &str) -> Result<Vec<Todo>, CoreError> {
        let priority = Priority::parse(priority)?;
        self.store
            .list(TodoFilter::Priority(priority))
            .await
            .map_err(|e| store_error(format!("Failed to list todos with priority {priority}"), e))
    }

    /// Completed todos, most recently updated first.
    pub async fn list_completed(&self) -> Result<Vec<Todo>, CoreError> {
        self.store
            .list(TodoFilter::Completed)
            .await
            .map_err(|e| store_error("Failed to list completed todos".to_string(), e))
    }

    /// Pending todos, most severe first, then newest created first.
    pub async fn list_pending(&self) -> Result<Vec<Todo>, CoreError> {
        self.store
            .list(TodoFilter::Pending)
            .await
            .map_err(|e| store_error("Failed to list pending todos".to_string(), e))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
