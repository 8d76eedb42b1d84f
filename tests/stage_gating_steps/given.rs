//! Given steps for stage gating BDD scenarios.

use super::world::BoardWorld;
use aalto::board::services::CreateTaskRequest;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("an empty task board")]
fn empty_task_board(world: &mut BoardWorld) {
    let _ = world;
}

#[given(r#"a task titled "{title}" described as "{description}" is created"#)]
fn task_is_created(
    world: &mut BoardWorld,
    title: String,
    description: String,
) -> Result<(), eyre::Report> {
    let created = world
        .service
        .create_task(CreateTaskRequest::new(title, description))
        .wrap_err("create task in scenario setup")?;
    world.last_task = Some(created);
    Ok(())
}
