//! Presentation adapter binding the use cases to UI-visible state.
//!
//! The adapter never renders anything. It holds the task snapshot a user
//! interface would display and keeps it in step with the store by
//! re-querying after every successful mutation.

mod config;
mod task_list;

pub use config::{TaskIdStrategy, TaskListConfig};
pub use task_list::{AdapterResult, TaskListAdapter};
