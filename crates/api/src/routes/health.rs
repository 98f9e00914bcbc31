use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
///
/// `database` is present when the check succeeded, `error` when it failed.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `healthy` or `unhealthy`.
    pub status: &'static str,
    /// Human-readable summary.
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// GET /health -- checks the database with a trivial read.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match todo_db::health_check(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy",
                message: "Todo API is running",
                database: Some("connected"),
                error: None,
            }),
        ),
        Err(err) => {
            tracing::warn!(error = %err, "Database health check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthResponse {
                    status: "unhealthy",
                    message: "Database connection failed",
                    database: None,
                    error: Some(err.to_string()),
                }),
            )
        }
    }
}

/// Mount health check routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
