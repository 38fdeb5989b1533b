//! In-memory record store.

use indexmap::IndexMap;

use super::RecordStore;
use crate::domain::{Task, TaskId};

/// In-memory store state (single source of truth for task records).
///
/// An `IndexMap` keeps lookup-by-id and insertion order in one structure,
/// so `list` stays deterministic without a side queue of ids.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: IndexMap<TaskId, Task>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for InMemoryStore {
    fn put(&mut self, task: Task) {
        self.records.insert(task.id, task);
    }

    fn get(&self, id: &TaskId) -> Option<&Task> {
        self.records.get(id)
    }

    fn list(&self) -> Vec<Task> {
        self.records.values().cloned().collect()
    }

    fn delete(&mut self, id: &TaskId) -> bool {
        // shift_remove keeps the survivors in their original order.
        self.records.shift_remove(id).is_some()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskStatus;

    fn task(name: &str) -> Task {
        Task::new(TaskId::generate(), name.to_string(), "desc".to_string())
    }

    #[test]
    fn put_then_get_returns_the_record() {
        let mut store = InMemoryStore::new();
        let t = task("one");

        store.put(t.clone());

        assert_eq!(store.get(&t.id), Some(&t));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn get_on_unknown_id_is_none() {
        let store = InMemoryStore::new();
        assert_eq!(store.get(&TaskId::generate()), None);
    }

    #[test]
    fn put_overwrites_under_the_same_id() {
        let mut store = InMemoryStore::new();
        let mut t = task("one");
        store.put(t.clone());

        t.status = TaskStatus::Done;
        store.put(t.clone());

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&t.id).unwrap().status, TaskStatus::Done);
    }

    #[test]
    fn delete_reports_whether_anything_was_removed() {
        let mut store = InMemoryStore::new();
        let t = task("one");
        store.put(t.clone());

        assert!(store.delete(&t.id));
        assert!(!store.delete(&t.id));
        assert!(store.is_empty());
    }

    #[test]
    fn list_is_in_insertion_order() {
        let mut store = InMemoryStore::new();
        let (a, b, c) = (task("a"), task("b"), task("c"));
        store.put(a.clone());
        store.put(b.clone());
        store.put(c.clone());

        let names: Vec<_> = store.list().into_iter().map(|t| t.name).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn delete_keeps_survivors_in_order() {
        let mut store = InMemoryStore::new();
        let (a, b, c) = (task("a"), task("b"), task("c"));
        store.put(a.clone());
        store.put(b.clone());
        store.put(c.clone());

        store.delete(&b.id);

        let names: Vec<_> = store.list().into_iter().map(|t| t.name).collect();
        assert_eq!(names, ["a", "c"]);
    }

    #[test]
    fn overwrite_does_not_change_position() {
        let mut store = InMemoryStore::new();
        let (mut a, b) = (task("a"), task("b"));
        store.put(a.clone());
        store.put(b.clone());

        a.name = "a2".to_string();
        store.put(a);

        let names: Vec<_> = store.list().into_iter().map(|t| t.name).collect();
        assert_eq!(names, ["a2", "b"]);
    }
}
