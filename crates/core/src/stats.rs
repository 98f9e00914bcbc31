//! Aggregate todo counts and the derived completion rate.

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Raw counts read from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoCounts {
    pub total: i64,
    pub completed: i64,
}

impl TodoCounts {
    /// Items not yet completed.
    pub fn pending(&self) -> i64 {
        self.total - self.completed
    }
}

/// Response payload for `GET /todos/stats`.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoStats {
    pub total: i64,
    pub completed: i64,
    pub pending: i64,
    pub completion_rate: f64,
}

impl From<TodoCounts> for TodoStats {
    fn from(counts: TodoCounts) -> Self {
        Self {
            total: counts.total,
            completed: counts.completed,
            pending: counts.pending(),
            completion_rate: completion_rate(counts.completed, counts.total),
        }
    }
}

impl Serialize for TodoStats {
    /// With no items the rate is written as the integer `0` rather than `0.0`.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TodoStats", 4)?;
        state.serialize_field("total", &self.total)?;
        state.serialize_field("completed", &self.completed)?;
        state.serialize_field("pending", &self.pending)?;
        if self.total == 0 {
            state.serialize_field("completion_rate", &0_i64)?;
        } else {
            state.serialize_field("completion_rate", &self.completion_rate)?;
        }
        state.end()
    }
}

/// Percentage of completed items rounded to one decimal place.
///
/// Returns `0.0` when there are no items at all.
pub fn completion_rate(completed: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    let percent = completed as f64 / total as f64 * 100.0;
    (percent * 10.0).round() / 10.0
}
