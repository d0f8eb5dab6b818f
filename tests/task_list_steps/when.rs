//! When steps for task list BDD scenarios.

use super::world::{TaskListWorld, run_async};
use rstest_bdd_macros::when;
use tasklist::task::services::{AddTaskRequest, TaskIdRequest};

#[when(r#"a task "{id}" titled "{title}" is added"#)]
fn add_task(world: &mut TaskListWorld, id: String, title: String) {
    let result = run_async(world.add.execute(AddTaskRequest::new(id, title)));
    world.last_result = Some(result);
}

#[when(r#"task "{id}" is toggled"#)]
fn toggle_task(world: &mut TaskListWorld, id: String) {
    let result = run_async(world.toggle.execute(TaskIdRequest::new(id)));
    world.last_result = Some(result);
}

#[when(r#"task "{id}" is deleted"#)]
fn delete_task(world: &mut TaskListWorld, id: String) {
    let result = run_async(world.delete.execute(TaskIdRequest::new(id)));
    world.last_result = Some(result);
}
