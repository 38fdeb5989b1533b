//! Task service: validation, identity assignment, and update merging.

use tokio::sync::Mutex;
use tracing::info;

use crate::domain::{DocketError, Task, TaskId, TaskUpdate, task};
use crate::store::{InMemoryStore, RecordStore};

/// The task service.
///
/// Owns the record store behind a single mutex and takes the lock once per
/// operation, so every create/update/delete is serialized with every other
/// operation and with reads. In particular `update`'s read-merge-write runs
/// entirely inside one critical section; a concurrent `delete` can never be
/// undone by an in-flight update writing a stale copy back.
///
/// Callers always receive clones of stored records; the store keeps the only
/// canonical copy. Share the service itself via `Arc`.
pub struct TaskService<S = InMemoryStore> {
    state: Mutex<S>,
}

impl TaskService<InMemoryStore> {
    /// A service over a fresh in-memory store.
    pub fn new() -> Self {
        Self::with_store(InMemoryStore::new())
    }
}

impl Default for TaskService<InMemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RecordStore> TaskService<S> {
    pub fn with_store(store: S) -> Self {
        Self {
            state: Mutex::new(store),
        }
    }

    /// Create a task: validate both fields, assign a fresh id, store it with
    /// the default `Created` status, and return the stored record.
    pub async fn create(&self, name: &str, description: &str) -> Result<Task, DocketError> {
        task::validate_name(name)?;
        task::validate_description(description)?;

        let record = Task::new(TaskId::generate(), name.to_string(), description.to_string());
        let mut store = self.state.lock().await;
        store.put(record.clone());
        info!(id = %record.id, "task created");
        Ok(record)
    }

    /// Fetch one task.
    pub async fn get(&self, id: TaskId) -> Result<Task, DocketError> {
        let store = self.state.lock().await;
        store.get(&id).cloned().ok_or(DocketError::NotFound(id))
    }

    /// All current tasks, in insertion order. Empty store yields an empty list.
    pub async fn list(&self) -> Vec<Task> {
        self.state.lock().await.list()
    }

    /// Apply a sparse update.
    ///
    /// Every supplied field is validated before anything is touched; if any
    /// of them fails, none are applied and the store is left as it was.
    /// Omitted fields keep their stored values. Validation runs before the
    /// existence check, so a malformed payload is reported as `Validation`
    /// even when the id is unknown.
    pub async fn update(&self, id: TaskId, update: TaskUpdate) -> Result<Task, DocketError> {
        if let Some(name) = &update.name {
            task::validate_name(name)?;
        }
        if let Some(description) = &update.description {
            task::validate_description(description)?;
        }

        let mut store = self.state.lock().await;
        let mut record = store.get(&id).cloned().ok_or(DocketError::NotFound(id))?;
        if let Some(name) = update.name {
            record.name = name;
        }
        if let Some(description) = update.description {
            record.description = description;
        }
        if let Some(status) = update.status {
            record.status = status;
        }
        store.put(record.clone());
        info!(id = %record.id, status = %record.status, "task updated");
        Ok(record)
    }

    /// Remove a task permanently. Deletion is destructive and immediate;
    /// there is no soft delete.
    pub async fn delete(&self, id: TaskId) -> Result<(), DocketError> {
        let mut store = self.state.lock().await;
        if store.delete(&id) {
            info!(id = %id, "task deleted");
            Ok(())
        } else {
            Err(DocketError::NotFound(id))
        }
    }
}
