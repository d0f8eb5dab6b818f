//! Port contracts for the task list.
//!
//! Ports define infrastructure-agnostic interfaces used by the use cases.

pub mod store;

#[cfg(test)]
pub(crate) use store::MockTaskStore;
pub use store::{TaskStore, TaskStoreFailure, TaskStoreResult};
