//! Then steps for stage gating BDD scenarios.

use super::world::BoardWorld;
use aalto::board::domain::{Stage, Task, TaskBoardError, TaskId};
use aalto::board::services::BoardServiceError;
use rstest_bdd_macros::then;

fn board_task(world: &BoardWorld, id: u64) -> Result<Task, eyre::Report> {
    let task_id = TaskId::new(id)?;
    world
        .service
        .find_task(task_id)?
        .ok_or_else(|| eyre::eyre!("task {id} is missing from the board"))
}

#[then(r#"task #{id:u64} is in stage {stage:u32}"#)]
fn task_is_in_stage(world: &BoardWorld, id: u64, stage: u32) -> Result<(), eyre::Report> {
    let task = board_task(world, id)?;
    let expected = Stage::new(stage)?;
    if task.stage() != expected {
        return Err(eyre::eyre!(
            "expected task {id} in stage {expected}, found stage {}",
            task.stage()
        ));
    }
    Ok(())
}

#[then(r#"task #{id:u64} is completed"#)]
fn task_is_completed(world: &BoardWorld, id: u64) -> Result<(), eyre::Report> {
    let task = board_task(world, id)?;
    if !task.completed() {
        return Err(eyre::eyre!("expected task {id} to be completed"));
    }
    Ok(())
}

#[then(r#"task #{id:u64} is not completed"#)]
fn task_is_not_completed(world: &BoardWorld, id: u64) -> Result<(), eyre::Report> {
    let task = board_task(world, id)?;
    if task.completed() {
        return Err(eyre::eyre!("expected task {id} to still be open"));
    }
    Ok(())
}

#[then("the creation attempt is rejected for an empty title")]
fn creation_rejected_for_empty_title(world: &BoardWorld) -> Result<(), eyre::Report> {
    let error = world
        .last_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing creation error in scenario world"))?;
    if !matches!(
        error,
        BoardServiceError::Domain(TaskBoardError::EmptyTitle)
    ) {
        return Err(eyre::eyre!("expected an empty-title rejection, got {error:?}"));
    }
    Ok(())
}

#[then("the board holds no tasks")]
fn board_holds_no_tasks(world: &BoardWorld) -> Result<(), eyre::Report> {
    let tasks = world.service.tasks()?;
    if !tasks.is_empty() {
        return Err(eyre::eyre!("expected an empty board, found {} tasks", tasks.len()));
    }
    Ok(())
}
