//! Loads the task feed around a given position and logs the visible tasks.
//!
//! Usage:
//!
//! ```text
//! taskfeed <latitude> <longitude> [search-query] [category]
//! ```
//!
//! The task service URL and feed settings are read from the environment
//! (see [`taskfeed::config`]). Log output honours `RUST_LOG`.

use std::env;
use std::sync::Arc;

use mockable::DefaultClock;
use taskfeed::config::FeedConfig;
use taskfeed::feed::{
    adapters::{
        filesystem::DirCredentialStore, http::HttpTaskRepository, memory::FixedLocationProvider,
    },
    domain::{CategoryFilter, Coordinates, FilterState, distance_label},
    ports::CredentialStore,
    services::FeedController,
};
use taskfeed::telemetry;
use thiserror::Error;
use tracing::{info, warn};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
enum CliError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

struct CliArgs {
    position: Coordinates,
    filter: FilterState,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliArgs, BoxError> {
    let usage = "usage: taskfeed <latitude> <longitude> [search-query] [category]";
    let latitude = args
        .next()
        .ok_or_else(|| CliError::InvalidArgs(usage.to_owned()))?
        .parse::<f64>()?;
    let longitude = args
        .next()
        .ok_or_else(|| CliError::InvalidArgs(usage.to_owned()))?
        .parse::<f64>()?;
    let position = Coordinates::new(latitude, longitude)?;

    let query = args.next().unwrap_or_default();
    let category = match args.next() {
        Some(raw) => CategoryFilter::try_from(raw.as_str())?,
        None => CategoryFilter::All,
    };

    Ok(CliArgs {
        position,
        filter: FilterState::new(query, category),
    })
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    telemetry::init(telemetry::DEFAULT_FILTER)?;

    let args = parse_args(env::args().skip(1))?;
    let config = FeedConfig::from_env()?;
    let repository = HttpTaskRepository::new(&config)?;

    if let Some(dir) = config.credentials_dir() {
        let store = DirCredentialStore::open(dir)?;
        let signed_in = store.read_token().await?.is_some();
        info!(%dir, signed_in, "checked stored credential");
    }

    let controller = FeedController::new(
        Arc::new(repository),
        Arc::new(FixedLocationProvider::new(args.position)),
        Arc::new(DefaultClock),
    )
    .with_radius(config.radius());
    controller.set_filter(args.filter);
    controller.mount().await;

    let view = controller.view();
    if let Some(error) = view.error {
        warn!(?error, "task feed unavailable");
    }
    info!(
        visible = view.tasks.len(),
        loaded = controller.loaded_count(),
        "task feed ready"
    );
    for task in &view.tasks {
        let distance = task
            .distance_from(args.position)
            .map(distance_label)
            .unwrap_or_default();
        info!(
            id = %task.id(),
            title = task.title(),
            category = task.category(),
            budget = task.budget(),
            due = %task.due_date(),
            distance = %distance,
            "task"
        );
    }
    Ok(())
}
