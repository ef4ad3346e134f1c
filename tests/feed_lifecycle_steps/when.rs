//! When steps for task feed lifecycle BDD scenarios.

use super::world::{FeedWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when("the feed is mounted")]
fn feed_mounted(world: &mut FeedWorld) {
    let controller = world.controller();
    run_async(controller.mount());
}

#[when("the feed is refreshed")]
fn feed_refreshed(world: &mut FeedWorld) {
    let controller = world.controller();
    run_async(controller.refresh());
}

#[when(r#"the task service now lists only "{title}" {km:u32} km away"#)]
fn service_now_lists_only(
    world: &mut FeedWorld,
    title: String,
    km: u32,
) -> Result<(), eyre::Report> {
    world.listed.clear();
    let task = world.task_away(&title, km)?;
    world.listed.push(task);
    world
        .repository
        .replace_tasks(world.listed.clone())
        .wrap_err("replace task service listing")?;
    Ok(())
}

#[when(r#"the user searches for "{query}""#)]
fn user_searches(world: &mut FeedWorld, query: String) {
    world.controller().set_search_query(query);
}
