//! Toggle completion use case.

use super::{TaskIdRequest, UseCaseResult, use_case_error};
use crate::task::ports::TaskStore;
use std::sync::Arc;

/// Flips the completion mark of a stored task.
pub struct ToggleMarkUseCase<S>
where
    S: TaskStore + ?Sized,
{
    store: Arc<S>,
}

impl<S> Clone for ToggleMarkUseCase<S>
where
    S: TaskStore + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> ToggleMarkUseCase<S>
where
    S: TaskStore + ?Sized,
{
    /// Creates the use case over a shared store.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Toggles the addressed task.
    ///
    /// # Errors
    ///
    /// Returns a use-case [`LayeredError`](crate::task::error::LayeredError)
    /// wrapping the store failure, typically "not found".
    pub async fn execute(&self, request: TaskIdRequest) -> UseCaseResult<()> {
        self.store
            .toggle_mark(request.id())
            .await
            .map_err(|err| use_case_error("toggle_mark", err))
    }
}
