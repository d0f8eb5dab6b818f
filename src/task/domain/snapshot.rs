//! Ordered point-in-time copy of the task collection.

use super::{Task, TaskId};
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// Copy of the store's id-to-task mapping, in insertion order.
///
/// Snapshots are detached from the store: later mutations are only visible
/// after querying a fresh snapshot. Serializes as a JSON-style map keyed by
/// task identifier.
#[derive(Debug, Clone, Default)]
pub struct TaskSnapshot {
    tasks: Vec<Task>,
    index: HashMap<TaskId, usize>,
}

impl TaskSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a snapshot from tasks whose identifiers are already unique.
    ///
    /// Skips the duplicate check done by [`FromIterator`]; callers must
    /// guarantee uniqueness, as the store does for its own collection.
    pub(crate) fn from_unique(tasks: Vec<Task>) -> Self {
        let index = tasks
            .iter()
            .enumerate()
            .map(|(position, task)| (task.id().clone(), position))
            .collect();
        Self { tasks, index }
    }

    /// Returns the task with the given identifier, if present.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.index
            .get(id)
            .and_then(|&position| self.tasks.get(position))
    }

    /// Returns `true` when a task with the given identifier is present.
    #[must_use]
    pub fn contains(&self, id: &TaskId) -> bool {
        self.index.contains_key(id)
    }

    /// Returns the number of tasks.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the snapshot holds no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterates tasks in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Iterates task identifiers in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &TaskId> {
        self.tasks.iter().map(Task::id)
    }

    /// Appends a task, replacing in place any task with the same identifier.
    fn insert(&mut self, task: Task) {
        let position = self.index.get(task.id()).copied();
        if let Some(slot) = position.and_then(|found| self.tasks.get_mut(found)) {
            *slot = task;
            return;
        }
        self.index.insert(task.id().clone(), self.tasks.len());
        self.tasks.push(task);
    }
}

impl PartialEq for TaskSnapshot {
    fn eq(&self, other: &Self) -> bool {
        self.tasks == other.tasks
    }
}

impl Eq for TaskSnapshot {}

impl FromIterator<Task> for TaskSnapshot {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        let mut snapshot = Self::new();
        for task in iter {
            snapshot.insert(task);
        }
        snapshot
    }
}

impl IntoIterator for TaskSnapshot {
    type Item = Task;
    type IntoIter = std::vec::IntoIter<Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.into_iter()
    }
}

impl<'a> IntoIterator for &'a TaskSnapshot {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

impl Serialize for TaskSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.tasks.iter().map(|task| (task.id(), task)))
    }
}
