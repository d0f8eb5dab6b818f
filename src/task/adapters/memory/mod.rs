//! In-memory adapters.

mod task;

pub use task::InMemoryTaskStore;
