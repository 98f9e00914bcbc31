//! Todo text rules and query-flag parsing.
//!
//! Used by the API layer before dispatching to the store, and again by the
//! store itself so that no code path can persist invalid text.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Entity name used in `NotFound` errors and log fields.
pub const TODO_ENTITY: &str = "Todo";

/// Maximum length of todo text in characters, measured after trimming.
pub const MAX_TODO_TEXT_LENGTH: usize = 500;

/// Query-string values that are read as `true`, compared case-insensitively.
const TRUTHY_FLAG_VALUES: [&str; 3] = ["true", "1", "yes"];

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Trim `raw` and check it against the todo text rules.
///
/// Returns the trimmed text on success. NUL characters are rejected since
/// PostgreSQL text columns cannot store them. Length is counted in characters,
/// not bytes, so multi-byte text gets the same 500-character allowance.
pub fn normalize_todo_text(raw: &str) -> Result<String, CoreError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(CoreError::Validation(
            "Todo text cannot be empty".to_string(),
        ));
    }
    if text.contains('\0') {
        return Err(CoreError::Validation(
            "Todo text cannot contain NUL characters".to_string(),
        ));
    }
    if text.chars().count() > MAX_TODO_TEXT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Todo text must be {MAX_TODO_TEXT_LENGTH} characters or less"
        )));
    }
    Ok(text.to_string())
}

/// Read a `?completed=` style flag.
///
/// `true`, `1` and `yes` (any case) are true; every other value, including
/// the empty string, is false.
pub fn parse_bool_flag(value: &str) -> bool {
    let value = value.trim();
    TRUTHY_FLAG_VALUES
        .iter()
        .any(|truthy| value.eq_ignore_ascii_case(truthy))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
