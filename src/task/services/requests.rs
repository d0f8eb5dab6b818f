//! Request payloads accepted by the use cases.

use crate::task::domain::TaskId;

/// Request payload for adding a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskRequest {
    id: TaskId,
    title: String,
}

impl AddTaskRequest {
    /// Creates a request for a task with the given identifier and title.
    #[must_use]
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    /// Returns the requested task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the requested title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    pub(super) fn into_parts(self) -> (TaskId, String) {
        (self.id, self.title)
    }
}

/// Request payload addressing an existing task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskIdRequest {
    id: TaskId,
}

impl TaskIdRequest {
    /// Creates a request for the given task identifier.
    #[must_use]
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }
}
