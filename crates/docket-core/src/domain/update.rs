//! Sparse partial-update payload.

use serde::{Deserialize, Serialize};

use super::status::TaskStatus;

/// The fields an update may change.
///
/// Each field is an explicit `Option` so the payload can tell "field
/// omitted" (`None`: leave the stored value untouched) apart from "field
/// explicitly supplied" (`Some`: validate and overwrite). In particular
/// `Some("")` is an explicit empty value and fails validation; it is never
/// coerced into "no change requested".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_fields_deserialize_as_none() {
        let update: TaskUpdate = serde_json::from_str(r#"{"status":"done"}"#).unwrap();
        assert_eq!(update.name, None);
        assert_eq!(update.description, None);
        assert_eq!(update.status, Some(TaskStatus::Done));
    }

    #[test]
    fn empty_string_deserializes_as_an_explicit_value() {
        let update: TaskUpdate = serde_json::from_str(r#"{"name":""}"#).unwrap();
        assert_eq!(update.name, Some(String::new()));
    }
}
