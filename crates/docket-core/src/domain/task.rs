//! Task record and field constraints.

use serde::{Deserialize, Serialize};

use super::errors::{Constraint, DocketError};
use super::ids::TaskId;
use super::status::TaskStatus;

/// Upper bound on `name`, in characters.
pub const NAME_MAX_CHARS: usize = 100;

/// Upper bound on `description`, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

/// A tracked task.
///
/// Design:
/// - The store owns the canonical record; everything handed to callers is a
///   clone, so nothing outside the store can mutate a stored task.
/// - Stored records always satisfy the field constraints; the service
///   validates before anything reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub description: String,
    pub status: TaskStatus,
}

impl Task {
    /// Build a new record with the default `Created` status.
    pub fn new(id: TaskId, name: String, description: String) -> Self {
        Self {
            id,
            name,
            description,
            status: TaskStatus::Created,
        }
    }
}

/// Check a `name` value against its constraints.
pub fn validate_name(value: &str) -> Result<(), DocketError> {
    validate_text("name", value, NAME_MAX_CHARS)
}

/// Check a `description` value against its constraints.
pub fn validate_description(value: &str) -> Result<(), DocketError> {
    validate_text("description", value, DESCRIPTION_MAX_CHARS)
}

/// Bounds are in characters, not bytes, so multibyte text gets the same
/// allowance as ASCII.
fn validate_text(field: &'static str, value: &str, max_chars: usize) -> Result<(), DocketError> {
    if value.is_empty() {
        return Err(DocketError::Validation {
            field,
            constraint: Constraint::NonEmpty,
        });
    }
    if value.chars().count() > max_chars {
        return Err(DocketError::Validation {
            field,
            constraint: Constraint::MaxChars(max_chars),
        });
    }
    Ok(())
}
