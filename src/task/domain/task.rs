//! Task entity.

use super::{TaskDomainError, TaskId};
use serde::{Deserialize, Serialize};

/// A single entry in the task list.
///
/// A task always carries a non-empty identifier and title. The identifier
/// is fixed for the lifetime of the task; only the completion mark and the
/// title can change, through [`Task::toggle_mark`] and
/// [`Task::change_title`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskFields")]
pub struct Task {
    id: TaskId,
    title: String,
    is_completed: bool,
}

/// Unvalidated wire shape used to deserialize a [`Task`].
#[derive(Deserialize)]
struct TaskFields {
    id: TaskId,
    title: String,
    #[serde(default)]
    is_completed: bool,
}

impl TryFrom<TaskFields> for Task {
    type Error = TaskDomainError;

    fn try_from(fields: TaskFields) -> Result<Self, Self::Error> {
        Self::with_completion(fields.id, fields.title, fields.is_completed)
    }
}

impl Task {
    /// Creates an open (not completed) task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyId`] or
    /// [`TaskDomainError::EmptyTitle`] when either value is empty.
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>) -> Result<Self, TaskDomainError> {
        Self::with_completion(id, title, false)
    }

    /// Creates a task with an explicit completion mark.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyId`] or
    /// [`TaskDomainError::EmptyTitle`] when either value is empty.
    pub fn with_completion(
        id: impl Into<TaskId>,
        title: impl Into<String>,
        is_completed: bool,
    ) -> Result<Self, TaskDomainError> {
        let task_id = id.into();
        if task_id.is_empty() {
            return Err(TaskDomainError::EmptyId);
        }
        let task_title = title.into();
        if task_title.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }

        Ok(Self {
            id: task_id,
            title: task_title,
            is_completed,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns `true` when the task is marked as completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Flips the completion mark.
    pub const fn toggle_mark(&mut self) {
        self.is_completed = !self.is_completed;
    }

    /// Replaces the title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyNewTitle`] when `new_title` is empty;
    /// the current title is kept.
    pub fn change_title(&mut self, new_title: impl Into<String>) -> Result<(), TaskDomainError> {
        let title = new_title.into();
        if title.is_empty() {
            return Err(TaskDomainError::EmptyNewTitle);
        }
        self.title = title;
        Ok(())
    }
}
