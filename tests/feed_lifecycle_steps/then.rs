//! Then steps for task feed lifecycle BDD scenarios.

use super::world::FeedWorld;
use rstest_bdd_macros::then;
use taskfeed::feed::{domain::FeedErrorKind, services::FeedView};

fn current_view(world: &FeedWorld) -> Result<FeedView, eyre::Report> {
    world
        .controller
        .as_ref()
        .map(|controller| controller.view())
        .ok_or_else(|| eyre::eyre!("feed controller was never created"))
}

fn parse_kind(kind: &str) -> Result<FeedErrorKind, eyre::Report> {
    serde_json::from_value(serde_json::Value::String(kind.to_owned()))
        .map_err(|err| eyre::eyre!("invalid error kind in scenario: {err}"))
}

#[then(r#"the feed shows "{titles}""#)]
fn feed_shows(world: &FeedWorld, titles: String) -> Result<(), eyre::Report> {
    let view = current_view(world)?;
    let expected: Vec<&str> = titles.split(',').map(str::trim).collect();
    let shown: Vec<&str> = view.tasks.iter().map(|task| task.title()).collect();

    if shown != expected {
        return Err(eyre::eyre!("expected {expected:?}, found {shown:?}"));
    }
    Ok(())
}

#[then("the feed is empty")]
fn feed_is_empty(world: &FeedWorld) -> Result<(), eyre::Report> {
    let view = current_view(world)?;
    if !view.tasks.is_empty() {
        return Err(eyre::eyre!("expected empty feed, found {:?}", view.tasks));
    }
    Ok(())
}

#[then("the feed is not loading")]
fn feed_not_loading(world: &FeedWorld) -> Result<(), eyre::Report> {
    let view = current_view(world)?;
    if view.loading || view.refreshing {
        return Err(eyre::eyre!("feed still busy in phase {:?}", view.phase));
    }
    Ok(())
}

#[then(r#"the feed reports a "{kind}" error"#)]
fn feed_reports_error(world: &FeedWorld, kind: String) -> Result<(), eyre::Report> {
    let expected = parse_kind(&kind)?;
    let view = current_view(world)?;
    if view.error != Some(expected) {
        return Err(eyre::eyre!("expected {expected:?} error, got {:?}", view.error));
    }
    Ok(())
}

#[then(r#"the missing location is explained as "{kind}""#)]
fn missing_location_explained(world: &FeedWorld, kind: String) -> Result<(), eyre::Report> {
    let expected = parse_kind(&kind)?;
    let view = current_view(world)?;
    if view.location_error != Some(expected) {
        return Err(eyre::eyre!(
            "expected {expected:?} location error, got {:?}",
            view.location_error
        ));
    }
    Ok(())
}
