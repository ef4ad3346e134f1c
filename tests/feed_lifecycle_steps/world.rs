//! Shared world state for task feed lifecycle BDD scenarios.

use std::sync::Arc;

use chrono::NaiveDate;
use mockable::DefaultClock;
use rstest::fixture;
use taskfeed::feed::{
    adapters::memory::{InMemoryTaskRepository, ScriptedLocationProvider},
    domain::{Coordinates, EARTH_RADIUS_KM, TaskId, TaskRecord},
    services::FeedController,
};

/// Controller type used by the BDD world.
pub type TestFeedController =
    FeedController<InMemoryTaskRepository, ScriptedLocationProvider, DefaultClock>;

/// Scenario world for task feed behaviour tests.
pub struct FeedWorld {
    pub repository: InMemoryTaskRepository,
    pub location: ScriptedLocationProvider,
    pub listed: Vec<TaskRecord>,
    pub controller: Option<TestFeedController>,
}

impl FeedWorld {
    /// Creates a world with an empty task service and no location outcome.
    #[must_use]
    pub fn new() -> Self {
        Self {
            repository: InMemoryTaskRepository::new(),
            location: ScriptedLocationProvider::default(),
            listed: Vec::new(),
            controller: None,
        }
    }

    /// Returns the controller, creating it on first use.
    pub fn controller(&mut self) -> &TestFeedController {
        let repository = self.repository.clone();
        let location = self.location.clone();
        self.controller.get_or_insert_with(|| {
            FeedController::new(
                Arc::new(repository),
                Arc::new(location),
                Arc::new(DefaultClock),
            )
        })
    }

    /// Builds a task located `km` north of [`home`].
    #[expect(clippy::float_arithmetic, reason = "offsets a fixture latitude")]
    pub fn task_away(&self, title: &str, km: u32) -> eyre::Result<TaskRecord> {
        let origin = home()?;
        let location = Coordinates::new(
            origin.latitude() + (f64::from(km) / EARTH_RADIUS_KM).to_degrees(),
            origin.longitude(),
        )?;
        let due = NaiveDate::from_ymd_opt(2030, 1, 15)
            .ok_or_else(|| eyre::eyre!("invalid due date"))?;
        let id = TaskId::new(format!("task-{}", self.listed.len() + 1));
        Ok(TaskRecord::new(id, title, 50.0, "Moving", due).with_location(location))
    }
}

impl Default for FeedWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// The user's position in every scenario.
pub fn home() -> eyre::Result<Coordinates> {
    Ok(Coordinates::new(40.758, -73.9855)?)
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> FeedWorld {
    FeedWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
