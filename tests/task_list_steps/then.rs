//! Then steps for task list BDD scenarios.

use super::world::{TaskListWorld, run_async};
use rstest_bdd_macros::then;
use tasklist::task::{
    domain::TaskId,
    error::{ErrorLayer, FailureReason, LayeredError},
    ports::{TaskStore, TaskStoreFailure},
};

#[then("the store lists {count:usize} task")]
fn store_lists_tasks(world: &TaskListWorld, count: usize) -> Result<(), eyre::Report> {
    let snapshot = run_async(world.store.get_all_tasks())?;
    eyre::ensure!(
        snapshot.len() == count,
        "expected {count} tasks, found {}",
        snapshot.len()
    );
    Ok(())
}

#[then(r#"task "{id}" is titled "{title}" and open"#)]
fn task_is_titled_and_open(
    world: &TaskListWorld,
    id: String,
    title: String,
) -> Result<(), eyre::Report> {
    let task = run_async(world.store.get_task_by_id(&TaskId::from(id)))?
        .ok_or_else(|| eyre::eyre!("missing task in store"))?;

    eyre::ensure!(task.title() == title, "unexpected title {}", task.title());
    eyre::ensure!(!task.is_completed(), "expected an open task");
    Ok(())
}

/// Returns the store error wrapped by the last use case failure.
fn last_store_cause(world: &TaskListWorld) -> Result<&LayeredError, eyre::Report> {
    let err = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))?
        .as_ref()
        .err()
        .ok_or_else(|| eyre::eyre!("expected the operation to fail"))?;

    eyre::ensure!(
        err.layer() == ErrorLayer::UseCase,
        "expected a use case error, got {}",
        err.layer()
    );
    let cause = err
        .layered_cause()
        .ok_or_else(|| eyre::eyre!("expected a wrapped cause"))?;
    eyre::ensure!(
        cause.layer() == ErrorLayer::Store,
        "expected a store cause, got {}",
        cause.layer()
    );
    Ok(cause)
}

#[then("the operation fails with a use case error wrapping a duplicate id store error")]
fn fails_with_duplicate_id(world: &TaskListWorld) -> Result<(), eyre::Report> {
    let cause = last_store_cause(world)?;
    if !matches!(
        cause.reason(),
        Some(FailureReason::Store(TaskStoreFailure::DuplicateId(_)))
    ) {
        return Err(eyre::eyre!(
            "expected DuplicateId reason, got {:?}",
            cause.reason()
        ));
    }
    Ok(())
}

#[then("the operation fails with a use case error wrapping a not found store error")]
fn fails_with_not_found(world: &TaskListWorld) -> Result<(), eyre::Report> {
    let cause = last_store_cause(world)?;
    if !matches!(
        cause.reason(),
        Some(FailureReason::Store(TaskStoreFailure::NotFound(_)))
    ) {
        return Err(eyre::eyre!(
            "expected NotFound reason, got {:?}",
            cause.reason()
        ));
    }
    Ok(())
}
