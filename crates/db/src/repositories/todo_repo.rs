//! Repository for the `todos` table.

use sqlx::PgPool;
use todo_core::error::CoreError;
use todo_core::stats::TodoCounts;
use todo_core::todo::{normalize_todo_text, TODO_ENTITY};
use todo_core::types::DbId;

use crate::error::DbError;
use crate::models::todo::{CreateTodo, Todo, UpdateTodo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, text, completed, created_at, updated_at";

/// Provides CRUD and count operations for todos.
///
/// Every mutation runs in its own transaction. Returning early with `?`
/// drops the transaction, which rolls it back.
pub struct TodoRepo;

impl TodoRepo {
    /// Insert a new todo, returning the created row.
    ///
    /// The text is trimmed and re-validated here even though handlers
    /// validate first. Both timestamps come from the same `NOW()`, so they
    /// are equal on the returned row.
    pub async fn create(pool: &PgPool, input: &CreateTodo) -> Result<Todo, DbError> {
        let text = normalize_todo_text(&input.text)?;

        let mut tx = pool.begin().await?;
        let query = format!("INSERT INTO todos (text) VALUES ($1) RETURNING {COLUMNS}");
        let todo = sqlx::query_as::<_, Todo>(&query)
            .bind(&text)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::debug!(todo_id = todo.id, "Inserted todo row");
        Ok(todo)
    }

    /// Find a todo by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = $1");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch a todo by its ID, failing with `NotFound` if it does not exist.
    pub async fn get(pool: &PgPool, id: DbId) -> Result<Todo, DbError> {
        Self::find_by_id(pool, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// List todos, most recently created first.
    ///
    /// When `completed` is `Some`, only rows with that completion state are
    /// returned. Rows created in the same instant fall back to id order.
    pub async fn list(pool: &PgPool, completed: Option<bool>) -> Result<Vec<Todo>, sqlx::Error> {
        match completed {
            Some(completed) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM todos WHERE completed = $1 \
                     ORDER BY created_at DESC, id DESC"
                );
                sqlx::query_as::<_, Todo>(&query)
                    .bind(completed)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query =
                    format!("SELECT {COLUMNS} FROM todos ORDER BY created_at DESC, id DESC");
                sqlx::query_as::<_, Todo>(&query).fetch_all(pool).await
            }
        }
    }

    /// Update a todo. Only non-`None` fields in `input` are applied.
    ///
    /// `updated_at` is refreshed even when `input` carries no fields.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateTodo) -> Result<Todo, DbError> {
        let text = input
            .text
            .as_deref()
            .map(normalize_todo_text)
            .transpose()?;

        let mut tx = pool.begin().await?;
        let query = format!(
            "UPDATE todos SET \
                text = COALESCE($2, text), \
                completed = COALESCE($3, completed), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let todo = sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .bind(text)
            .bind(input.completed)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| not_found(id))?;
        tx.commit().await?;

        Ok(todo)
    }

    /// Permanently delete a todo. Fails with `NotFound` if no row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), DbError> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        tx.commit().await?;

        tracing::debug!(todo_id = id, "Deleted todo row");
        Ok(())
    }

    /// Count all todos and the completed subset in a single scan.
    pub async fn count(pool: &PgPool) -> Result<TodoCounts, sqlx::Error> {
        let (total, completed): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(*), COUNT(*) FILTER (WHERE completed) FROM todos",
        )
        .fetch_one(pool)
        .await?;
        Ok(TodoCounts { total, completed })
    }
}

fn not_found(id: DbId) -> DbError {
    DbError::Core(CoreError::NotFound {
        entity: TODO_ENTITY,
        id,
    })
}
