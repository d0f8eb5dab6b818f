//! Domain model for the task list.
//!
//! The domain owns the [`Task`] entity and its invariants, the opaque
//! [`TaskId`] identity, and the ordered [`TaskSnapshot`] handed to callers
//! when listing. Nothing here knows about storage or presentation.

mod error;
mod ids;
mod snapshot;
mod task;

pub use error::TaskDomainError;
pub use ids::TaskId;
pub use snapshot::TaskSnapshot;
pub use task::Task;
