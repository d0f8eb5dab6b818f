//! Given steps for task list BDD scenarios.

use super::world::{TaskListWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tasklist::task::services::AddTaskRequest;

#[given("an empty task store")]
fn empty_task_store(world: &mut TaskListWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.store.is_empty()?,
        "scenario world should start with an empty store"
    );
    Ok(())
}

#[given(r#"a task "{id}" titled "{title}" has been added"#)]
fn task_has_been_added(
    world: &mut TaskListWorld,
    id: String,
    title: String,
) -> Result<(), eyre::Report> {
    run_async(world.add.execute(AddTaskRequest::new(id, title)))
        .wrap_err("add task in scenario setup")?;
    Ok(())
}
