use todo_core::error::CoreError;

/// Error returned by repository operations.
///
/// Domain failures (unknown id, invalid text) arrive as [`CoreError`];
/// everything the database itself reports stays a raw [`sqlx::Error`].
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}
