//! Task lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a task.
///
/// Every task starts as `Created`; the status only changes through an
/// explicit update. There is no transition graph beyond that: any status
/// may be set from any other.
///
/// Design note: a closed enum means the store can never hold an undefined
/// status; unknown wire values fail at decode time instead of leaking in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Freshly created, not started.
    Created,

    /// Being worked on.
    InProgress,

    /// Finished.
    Done,
}

impl TaskStatus {
    /// The wire/display form ("created", "in_progress", "done").
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Created => "created",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Done => "done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
