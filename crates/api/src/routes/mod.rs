pub mod health;
pub mod todos;

use axum::Router;

use crate::state::AppState;

/// Build the route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                 database health check
///
/// /todos                  list, create
/// /todos/stats            completion statistics
/// /todos/{id}             get, update, delete
/// ```
///
/// The same tree is mounted both at the root and under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/todos", todos::router())
}
