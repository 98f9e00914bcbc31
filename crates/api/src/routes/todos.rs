use axum::routing::get;
use axum::Router;

use crate::handlers::todos;
use crate::state::AppState;

/// Todo routes mounted at `/todos`.
///
/// ```text
/// GET    /        -> list (?completed=)
/// POST   /        -> create
/// GET    /stats   -> stats
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(todos::list).post(todos::create))
        .route("/stats", get(todos::stats))
        .route(
            "/{id}",
            get(todos::get_by_id)
                .put(todos::update)
                .delete(todos::delete),
        )
}
