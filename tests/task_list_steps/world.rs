//! Shared world state for task list BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use tasklist::task::{
    adapters::memory::InMemoryTaskStore,
    error::LayeredError,
    services::{AddTaskUseCase, DeleteTaskUseCase, ToggleMarkUseCase},
};

/// Scenario world for task list behaviour tests.
pub struct TaskListWorld {
    pub store: Arc<InMemoryTaskStore>,
    pub add: AddTaskUseCase<InMemoryTaskStore>,
    pub delete: DeleteTaskUseCase<InMemoryTaskStore>,
    pub toggle: ToggleMarkUseCase<InMemoryTaskStore>,
    pub last_result: Option<Result<(), LayeredError>>,
}

impl TaskListWorld {
    /// Creates a world over an empty store.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemoryTaskStore::new());

        Self {
            add: AddTaskUseCase::new(Arc::clone(&store)),
            delete: DeleteTaskUseCase::new(Arc::clone(&store)),
            toggle: ToggleMarkUseCase::new(Arc::clone(&store)),
            store,
            last_result: None,
        }
    }
}

impl Default for TaskListWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskListWorld {
    TaskListWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
