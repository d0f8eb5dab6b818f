//! Use cases for task list orchestration.
//!
//! Each use case performs exactly one store call and translates any
//! failure into the use-case layer of the error chain.

mod add_task;
mod delete_task;
mod requests;
mod toggle_mark;

pub use add_task::AddTaskUseCase;
pub use delete_task::DeleteTaskUseCase;
pub use requests::{AddTaskRequest, TaskIdRequest};
pub use toggle_mark::ToggleMarkUseCase;

use crate::task::error::{ErrorLayer, LayeredError};

/// Result type for use case operations.
///
/// Errors returned through this alias are always tagged
/// [`ErrorLayer::UseCase`].
pub type UseCaseResult<T> = Result<T, LayeredError>;

/// Lifts a failure crossing the use case boundary.
///
/// Store errors are wrapped directly; anything else a store hands back is
/// first wrapped as a store error so the immediate cause is always one.
fn use_case_error(operation: &'static str, err: LayeredError) -> LayeredError {
    let lifted = err
        .ensure_layer(ErrorLayer::Store)
        .lift(ErrorLayer::UseCase);
    tracing::debug!(operation, trace = %lifted.trace(), "use case failed");
    lifted
}
