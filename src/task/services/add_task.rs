//! Add task use case.

use super::{AddTaskRequest, UseCaseResult, use_case_error};
use crate::task::{
    domain::Task,
    error::{ErrorLayer, LayeredError},
    ports::{TaskStore, TaskStoreResult},
};
use std::sync::Arc;

/// Builds a task and inserts it into the store.
pub struct AddTaskUseCase<S>
where
    S: TaskStore + ?Sized,
{
    store: Arc<S>,
}

impl<S> Clone for AddTaskUseCase<S>
where
    S: TaskStore + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> AddTaskUseCase<S>
where
    S: TaskStore + ?Sized,
{
    /// Creates the use case over a shared store.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Adds a new open task.
    ///
    /// An invalid identifier or title fails at the entity layer and reaches
    /// this boundary already lifted into the store layer, so the returned
    /// error always wraps a store error.
    ///
    /// # Errors
    ///
    /// Returns a use-case [`LayeredError`] when the task is invalid or the
    /// store rejects it.
    pub async fn execute(&self, request: AddTaskRequest) -> UseCaseResult<()> {
        self.add(request)
            .await
            .map_err(|err| use_case_error("add_task", err))
    }

    async fn add(&self, request: AddTaskRequest) -> TaskStoreResult<()> {
        let (id, title) = request.into_parts();
        let task = Task::new(id, title)
            .map_err(|err| LayeredError::from(err).lift(ErrorLayer::Store))?;
        self.store.add_task(task).await
    }
}
