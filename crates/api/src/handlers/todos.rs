//! Handlers for the `/todos` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use todo_core::error::CoreError;
use todo_core::stats::TodoStats;
use todo_core::todo::normalize_todo_text;
use todo_core::types::DbId;
use todo_db::models::todo::{CreateTodo, Todo, UpdateTodo};
use todo_db::repositories::TodoRepo;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::TodoListParams;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

/// Body of `POST /todos`. `text` is optional here so a missing field gets a
/// specific message instead of a generic deserialization error.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub text: Option<String>,
}

/// Body of `PUT /todos/{id}`. Absent or `null` fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodoRequest {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /todos?completed=
///
/// List todos newest first, optionally filtered by completion state.
pub async fn list(
    State(state): State<AppState>,
    AppQuery(pairs): AppQuery<Vec<(String, String)>>,
) -> AppResult<Json<Vec<Todo>>> {
    let params = TodoListParams::from_pairs(pairs);
    let todos = TodoRepo::list(&state.pool, params.completed_filter()).await?;
    Ok(Json(todos))
}

/// POST /todos
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateTodoRequest>,
) -> AppResult<(StatusCode, Json<Todo>)> {
    let raw = input
        .text
        .ok_or_else(|| CoreError::Validation("Todo text is required".to_string()))?;
    let text = normalize_todo_text(&raw)?;

    let todo = TodoRepo::create(&state.pool, &CreateTodo { text }).await?;

    tracing::info!(todo_id = todo.id, "Todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

/// GET /todos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Todo>> {
    let todo = TodoRepo::get(&state.pool, id).await?;
    Ok(Json(todo))
}

/// PUT /todos/{id}
///
/// Partial update: only the fields present in the body change, and
/// `updated_at` is refreshed even for an empty body.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateTodoRequest>,
) -> AppResult<Json<Todo>> {
    let text = input
        .text
        .as_deref()
        .map(normalize_todo_text)
        .transpose()?;

    let update = UpdateTodo {
        text,
        completed: input.completed,
    };
    let todo = TodoRepo::update(&state.pool, id, &update).await?;

    tracing::info!(todo_id = id, completed = todo.completed, "Todo updated");
    Ok(Json(todo))
}

/// DELETE /todos/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    TodoRepo::delete(&state.pool, id).await?;

    tracing::info!(todo_id = id, "Todo deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /todos/stats
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<TodoStats>> {
    let counts = TodoRepo::count(&state.pool).await?;
    Ok(Json(TodoStats::from(counts)))
}
