use std::fmt;
use thiserror::Error;

use super::ids::TaskId;

/// The constraint a supplied value violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    NonEmpty,
    MaxChars(usize),
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::NonEmpty => f.write_str("must not be empty"),
            Constraint::MaxChars(max) => write!(f, "must be at most {max} characters"),
        }
    }
}

/// Everything the core can fail with.
///
/// Both variants are recoverable by the caller, and a failed operation never
/// leaves the store mutated. The boundary layer maps `NotFound` to its
/// not-found response and `Validation` to a client error naming the field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocketError {
    #[error("task not found: {0}")]
    NotFound(TaskId),

    #[error("invalid {field}: {constraint}")]
    Validation {
        field: &'static str,
        constraint: Constraint,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_names_field_and_constraint() {
        let err = DocketError::Validation {
            field: "name",
            constraint: Constraint::MaxChars(100),
        };
        assert_eq!(err.to_string(), "invalid name: must be at most 100 characters");
    }

    #[test]
    fn not_found_message_carries_the_id() {
        let id = TaskId::generate();
        let err = DocketError::NotFound(id);
        assert!(err.to_string().contains(&id.to_string()));
    }
}
