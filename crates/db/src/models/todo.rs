//! Todo entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todo_core::types::{DbId, Timestamp};

/// A row from the `todos` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Todo {
    pub id: DbId,
    pub text: String,
    pub completed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new todo. New todos always start incomplete.
#[derive(Debug, Clone)]
pub struct CreateTodo {
    pub text: String,
}

/// DTO for updating an existing todo. All fields are optional.
#[derive(Debug, Clone, Default)]
pub struct UpdateTodo {
    pub text: Option<String>,
    pub completed: Option<bool>,
}
