//! Handlers for the `/todos` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use todo_core::todo::{CreateTodo, Todo, UpdateTodo};
use todo_core::types::DbId;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::TodoListParams;
use crate::response::{DataResponse, ListResponse};
use crate::state::AppState;

/// GET /api/v1/todos?priority=&completed=
///
/// `priority` takes precedence over `completed` when both are given.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<TodoListParams>,
) -> AppResult<Json<ListResponse<Todo>>> {
    let todos = match (params.priority.as_deref(), params.completed.as_deref()) {
        (Some(priority), _) if !priority.is_empty() => {
            state.todos.list_by_priority(priority).await?
        }
        (_, Some("true")) => state.todos.list_completed().await?,
        (_, Some("false")) => state.todos.list_pending().await?,
        (_, Some(other)) if !other.is_empty() => {
            return Err(AppError::BadRequest(format!(
                "completed must be 'true' or 'false', got '{other}'"
            )));
        }
        _ => state.todos.list_all().await?,
    };
    Ok(Json(ListResponse::from(todos)))
}

/// POST /api/v1/todos
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTodo>,
) -> AppResult<(StatusCode, Json<DataResponse<Todo>>)> {
    input.validate()?;
    let todo = state.todos.create(&input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: todo })))
}

/// GET /api/v1/todos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Todo>>> {
    let todo = state.todos.get_by_id(id).await?;
    Ok(Json(DataResponse { data: todo }))
}

/// PUT /api/v1/todos/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTodo>,
) -> AppResult<Json<DataResponse<Todo>>> {
    input.validate()?;
    let todo = state.todos.update(id, &input).await?;
    Ok(Json(DataResponse { data: todo }))
}

/// DELETE /api/v1/todos/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    state.todos.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
