//! Given steps for task feed lifecycle BDD scenarios.

use super::world::{FeedWorld, home};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskfeed::feed::{
    adapters::memory::ScriptedLocationProvider,
    ports::TaskRepositoryError,
};

#[given("a user whose location is known")]
fn user_location_known(world: &mut FeedWorld) -> Result<(), eyre::Report> {
    world.location = ScriptedLocationProvider::default().then(Ok(home()?));
    Ok(())
}

#[given("a user who denied location permission")]
fn user_denied_location(world: &mut FeedWorld) {
    world.location = ScriptedLocationProvider::denied();
}

#[given(r#"the task service lists "{title}" {km:u32} km away"#)]
fn service_lists_task(world: &mut FeedWorld, title: String, km: u32) -> Result<(), eyre::Report> {
    let task = world.task_away(&title, km)?;
    world.listed.push(task);
    world
        .repository
        .replace_tasks(world.listed.clone())
        .wrap_err("seed task service")?;
    Ok(())
}

#[given("the task service is unreachable")]
fn service_unreachable(world: &mut FeedWorld) -> Result<(), eyre::Report> {
    world
        .repository
        .fail_next_fetch(TaskRepositoryError::network(std::io::Error::other(
            "connection refused",
        )))
        .wrap_err("queue task service failure")?;
    Ok(())
}
