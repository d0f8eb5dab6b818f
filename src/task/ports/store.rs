//! Store port for task lookup and mutation.

use crate::task::{
    domain::{Task, TaskId, TaskSnapshot},
    error::LayeredError,
};
use async_trait::async_trait;
use thiserror::Error;

/// Result type for task store operations.
///
/// Errors returned through this alias are always tagged
/// [`ErrorLayer::Store`](crate::task::error::ErrorLayer::Store).
pub type TaskStoreResult<T> = Result<T, LayeredError>;

/// Task collection contract.
///
/// Implementations own the canonical tasks. Every failure leaving an
/// implementation is a store-layer [`LayeredError`]: store rejections are
/// raised as [`TaskStoreFailure`] and any other failure is lifted into the
/// store layer with its original error kept as the cause.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Returns a copy of every task in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a store error only when the underlying collection cannot be
    /// read.
    async fn get_all_tasks(&self) -> TaskStoreResult<TaskSnapshot>;

    /// Inserts a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreFailure::DuplicateId`] when a task with the same
    /// identifier is already stored; the collection is left unchanged.
    async fn add_task(&self, task: Task) -> TaskStoreResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns a store error only when the underlying collection cannot be
    /// read.
    async fn get_task_by_id(&self, id: &TaskId) -> TaskStoreResult<Option<Task>>;

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreFailure::NotFound`] when no task has the
    /// identifier; the collection is left unchanged.
    async fn delete_task(&self, id: &TaskId) -> TaskStoreResult<()>;

    /// Flips the completion mark of a stored task in place.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreFailure::NotFound`] when no task has the
    /// identifier; the collection is left unchanged.
    async fn toggle_mark(&self, id: &TaskId) -> TaskStoreResult<()>;
}

/// Rejections raised by task store implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskStoreFailure {
    /// A task with the same identifier already exists.
    #[error("duplicate task id: {0}")]
    DuplicateId(TaskId),

    /// No task has the identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}
