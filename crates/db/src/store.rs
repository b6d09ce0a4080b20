//! [`TodoStore`] backed by a PostgreSQL pool.

use todo_core::todo::{NewTodo, Todo};
use todo_core::todo_service::{TodoFilter, TodoStore};
use todo_core::types::DbId;

use crate::repositories::TodoRepo;
use crate::DbPool;

/// Store handle constructed once at startup and injected into
/// `TodoService`. Cloning shares the underlying pool.
#[derive(Debug, Clone)]
pub struct PgTodoStore {
    pool: DbPool,
}

impl PgTodoStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl TodoStore for PgTodoStore {
    type Error = sqlx::Error;

    async fn list(&self, filter: TodoFilter) -> Result<Vec<Todo>, Self::Error> {
        match filter {
            TodoFilter::All => TodoRepo::list(&self.pool).await,
            TodoFilter::Priority(priority) => TodoRepo::list_by_priority(&self.pool, priority).await,
            TodoFilter::Completed => TodoRepo::list_completed(&self.pool).await,
            TodoFilter::Pending => TodoRepo::list_pending(&self.pool).await,
        }
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Todo>, Self::Error> {
        TodoRepo::find_by_id(&self.pool, id).await
    }

    async fn find_by_id_include_deleted(&self, id: DbId) -> Result<Option<Todo>, Self::Error> {
        TodoRepo::find_by_id_include_deleted(&self.pool, id).await
    }

    async fn insert(&self, todo: &NewTodo) -> Result<Todo, Self::Error> {
        TodoRepo::create(&self.pool, todo).await
    }

    async fn update(&self, todo: &Todo) -> Result<Option<Todo>, Self::Error> {
        TodoRepo::update(&self.pool, todo).await
    }

    async fn soft_delete(&self, id: DbId) -> Result<u64, Self::Error> {
        TodoRepo::soft_delete(&self.pool, id).await
    }
}
