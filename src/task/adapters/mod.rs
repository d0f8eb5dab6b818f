//! Adapter implementations for the task list.
//!
//! - [`memory`]: the in-memory [`TaskStore`](crate::task::ports::TaskStore)
//! - [`presentation`]: the state binding consumed by a user interface

pub mod memory;
pub mod presentation;
