//! When steps for stage gating BDD scenarios.

use super::world::BoardWorld;
use aalto::board::domain::TaskId;
use aalto::board::services::CreateTaskRequest;
use rstest_bdd_macros::when;

#[when(r#"task #{id:u64} is advanced"#)]
fn task_is_advanced(world: &mut BoardWorld, id: u64) -> Result<(), eyre::Report> {
    let task_id = TaskId::new(id)?;
    match world.service.advance_task(task_id) {
        Ok(task) => world.last_task = Some(task),
        Err(err) => world.last_error = Some(err),
    }
    Ok(())
}

#[when(r#"a task titled "{title}" described as "{description}" is submitted"#)]
fn task_is_submitted(world: &mut BoardWorld, title: String, description: String) {
    match world
        .service
        .create_task(CreateTaskRequest::new(title, description))
    {
        Ok(task) => world.last_task = Some(task),
        Err(err) => world.last_error = Some(err),
    }
}
