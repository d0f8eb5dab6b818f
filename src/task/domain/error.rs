//! Error types for task entity validation.

use thiserror::Error;

/// Invariant violations raised by the [`Task`](super::Task) entity.
///
/// These are the entity-layer origins of the error chain; converting one
/// into a [`LayeredError`](crate::task::error::LayeredError) tags it with
/// [`ErrorLayer::Entity`](crate::task::error::ErrorLayer::Entity).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is empty.
    #[error("task must have an id and a title")]
    EmptyId,

    /// The task title is empty.
    #[error("task must have an id and a title")]
    EmptyTitle,

    /// A rename was attempted with an empty title.
    #[error("new title cannot be empty")]
    EmptyNewTitle,
}
