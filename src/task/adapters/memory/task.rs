//! In-memory task store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::task::{
    domain::{Task, TaskId, TaskSnapshot},
    error::{ErrorLayer, LayeredError},
    ports::{TaskStore, TaskStoreFailure, TaskStoreResult},
};

/// In-memory task store living for the lifetime of the process.
///
/// Clones share the same collection, so one store can be handed to several
/// use cases and still be queried by the caller afterwards.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    order: Vec<TaskId>,
}

impl InMemoryTaskState {
    fn snapshot(&self) -> TaskSnapshot {
        TaskSnapshot::from_unique(
            self.order
                .iter()
                .filter_map(|id| self.tasks.get(id).cloned())
                .collect(),
        )
    }
}

impl InMemoryTaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored tasks.
    ///
    /// # Errors
    ///
    /// Returns a store error when the collection lock is poisoned.
    pub fn len(&self) -> TaskStoreResult<usize> {
        let state = self.state.read().map_err(|err| lock_poisoned(&err))?;
        Ok(state.tasks.len())
    }

    /// Returns `true` when the store holds no tasks.
    ///
    /// # Errors
    ///
    /// Returns a store error when the collection lock is poisoned.
    pub fn is_empty(&self) -> TaskStoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

/// Lifts a poisoned-lock failure into the store layer.
fn lock_poisoned<T>(err: &PoisonError<T>) -> LayeredError {
    LayeredError::foreign(ErrorLayer::Store, std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn get_all_tasks(&self) -> TaskStoreResult<TaskSnapshot> {
        let state = self.state.read().map_err(|err| lock_poisoned(&err))?;
        Ok(state.snapshot())
    }

    async fn add_task(&self, task: Task) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(|err| lock_poisoned(&err))?;
        if state.tasks.contains_key(task.id()) {
            return Err(TaskStoreFailure::DuplicateId(task.id().clone()).into());
        }

        tracing::debug!(task_id = %task.id(), "task added");
        state.order.push(task.id().clone());
        state.tasks.insert(task.id().clone(), task);
        Ok(())
    }

    async fn get_task_by_id(&self, id: &TaskId) -> TaskStoreResult<Option<Task>> {
        let state = self.state.read().map_err(|err| lock_poisoned(&err))?;
        Ok(state.tasks.get(id).cloned())
    }

    async fn delete_task(&self, id: &TaskId) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(|err| lock_poisoned(&err))?;
        if state.tasks.remove(id).is_none() {
            return Err(TaskStoreFailure::NotFound(id.clone()).into());
        }

        state.order.retain(|stored| stored != id);
        tracing::debug!(task_id = %id, "task deleted");
        Ok(())
    }

    async fn toggle_mark(&self, id: &TaskId) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(|err| lock_poisoned(&err))?;
        let task = state
            .tasks
            .get_mut(id)
            .ok_or_else(|| LayeredError::from(TaskStoreFailure::NotFound(id.clone())))?;

        task.toggle_mark();
        tracing::debug!(task_id = %id, is_completed = task.is_completed(), "task mark toggled");
        Ok(())
    }
}
