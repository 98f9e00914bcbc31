//! Query parameter types for API handlers.

/// Query parameters for `GET /todos`.
///
/// `completed` stays a raw string so that any value is accepted: see
/// [`todo_core::todo::parse_bool_flag`] for how it is read.
#[derive(Debug, Default)]
pub struct TodoListParams {
    pub completed: Option<String>,
}

impl TodoListParams {
    /// Build from raw query pairs. A repeated key keeps its first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let completed = pairs
            .into_iter()
            .find(|(key, _)| key == "completed")
            .map(|(_, value)| value);
        Self { completed }
    }

    /// The completion filter to apply, or `None` for an unfiltered listing.
    pub fn completed_filter(&self) -> Option<bool> {
        self.completed
            .as_deref()
            .map(todo_core::todo::parse_bool_flag)
    }
}
