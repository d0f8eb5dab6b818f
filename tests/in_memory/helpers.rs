//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use rstest::fixture;
use tasklist::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{Task, TaskSnapshot},
    services::{AddTaskUseCase, DeleteTaskUseCase, ToggleMarkUseCase},
};

/// Use cases wired to one shared store.
pub struct UseCases {
    pub store: Arc<InMemoryTaskStore>,
    pub add: AddTaskUseCase<InMemoryTaskStore>,
    pub delete: DeleteTaskUseCase<InMemoryTaskStore>,
    pub toggle: ToggleMarkUseCase<InMemoryTaskStore>,
}

/// Provides use cases over a fresh in-memory store for each test.
#[fixture]
pub fn use_cases() -> UseCases {
    let store = Arc::new(InMemoryTaskStore::new());
    UseCases {
        add: AddTaskUseCase::new(Arc::clone(&store)),
        delete: DeleteTaskUseCase::new(Arc::clone(&store)),
        toggle: ToggleMarkUseCase::new(Arc::clone(&store)),
        store,
    }
}

/// Projects a snapshot into `(id, title, is_completed)` tuples.
pub fn entries(snapshot: &TaskSnapshot) -> Vec<(String, String, bool)> {
    snapshot
        .iter()
        .map(|task: &Task| {
            (
                task.id().as_str().to_owned(),
                task.title().to_owned(),
                task.is_completed(),
            )
        })
        .collect()
}
