//! Feed controller orchestrating location, task fetches, and filtering.

use crate::feed::{
    domain::{
        CategoryFilter, Coordinates, FeedErrorKind, FeedPhase, FeedRadius, FilterState, TaskId,
        TaskRecord, compute_visible_tasks_within,
    },
    ports::{
        LocationError, LocationProvider, LocationResult, TaskRepository, TaskRepositoryResult,
    },
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info, warn};

/// Snapshot of the feed for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedView {
    /// Visible tasks after filtering, in service order.
    pub tasks: Vec<TaskRecord>,
    /// Current lifecycle phase.
    pub phase: FeedPhase,
    /// `true` while the first load is in flight.
    pub loading: bool,
    /// `true` while a refresh is in flight.
    pub refreshing: bool,
    /// Failure of the most recent task fetch, if it failed.
    pub error: Option<FeedErrorKind>,
    /// Why no user location is available, if it is missing.
    pub location_error: Option<FeedErrorKind>,
    /// Active filter.
    pub filter: FilterState,
    /// User location held for the session.
    pub user_location: Option<Coordinates>,
    /// When the task list was last replaced.
    pub last_updated: Option<DateTime<Utc>>,
}

/// Controller-owned feed state; each field has a single writer.
#[derive(Debug, Default)]
struct FeedState {
    phase: FeedPhase,
    generation: u64,
    tasks: Vec<TaskRecord>,
    user_location: Option<Coordinates>,
    locating: bool,
    location_error: Option<LocationError>,
    error: Option<FeedErrorKind>,
    filter: FilterState,
    last_updated: Option<DateTime<Utc>>,
}

impl FeedState {
    fn transition(&mut self, target: FeedPhase) -> bool {
        if !self.phase.can_transition_to(target) {
            warn!(
                from = self.phase.as_str(),
                to = target.as_str(),
                "rejected feed phase transition"
            );
            return false;
        }
        debug!(
            from = self.phase.as_str(),
            to = target.as_str(),
            "feed phase transition"
        );
        self.phase = target;
        true
    }
}

/// How a refresh request is carried out.
enum RefreshPlan {
    /// Nothing has loaded yet; perform the initial load.
    Mount,
    /// Fetch under the given generation, optionally retrying location.
    Fetch { generation: u64, locate: bool },
}

/// Feed controller.
///
/// Owns the feed state. Location and task requests run concurrently; a
/// completion is applied only if no newer load or refresh has started since.
/// Filter changes never perform I/O.
pub struct FeedController<R, L, C>
where
    R: TaskRepository,
    L: LocationProvider,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    location: Arc<L>,
    clock: Arc<C>,
    radius: FeedRadius,
    state: RwLock<FeedState>,
}

impl<R, L, C> FeedController<R, L, C>
where
    R: TaskRepository,
    L: LocationProvider,
    C: Clock + Send + Sync,
{
    /// Creates an idle controller with the default radius.
    #[must_use]
    pub fn new(repository: Arc<R>, location: Arc<L>, clock: Arc<C>) -> Self {
        Self {
            repository,
            location,
            clock,
            radius: FeedRadius::default(),
            state: RwLock::new(FeedState::default()),
        }
    }

    /// Overrides the feed radius.
    #[must_use]
    pub const fn with_radius(mut self, radius: FeedRadius) -> Self {
        self.radius = radius;
        self
    }

    fn read_state(&self) -> RwLockReadGuard<'_, FeedState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, FeedState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Performs the initial load.
    ///
    /// Moves `Idle → Loading`, requests the location and the task set
    /// concurrently, and settles in `Ready` or `Failed`. Calling it outside
    /// `Idle` has no effect. Returns the resulting phase.
    pub async fn mount(&self) -> FeedPhase {
        let generation = {
            let mut state = self.write_state();
            if state.phase != FeedPhase::Idle {
                debug!(phase = state.phase.as_str(), "feed already mounted");
                return state.phase;
            }
            state.transition(FeedPhase::Loading);
            state.locating = true;
            state.generation += 1;
            state.generation
        };
        info!(generation, "loading task feed");

        let (location, tasks) = tokio::join!(
            self.location.request_location(),
            self.repository.fetch_tasks()
        );
        self.apply_location(location);
        self.apply_tasks(generation, tasks)
    }

    /// Re-fetches the task set while keeping current tasks visible.
    ///
    /// The location is requested again only if none is held and no request
    /// for it is still outstanding. A refresh
    /// issued while another load is in flight supersedes it. Before the
    /// first load this performs [`FeedController::mount`]. Returns the
    /// resulting phase.
    pub async fn refresh(&self) -> FeedPhase {
        let plan = {
            let mut state = self.write_state();
            if state.phase == FeedPhase::Idle {
                RefreshPlan::Mount
            } else {
                if !state.phase.is_busy() {
                    state.transition(FeedPhase::Refreshing);
                }
                state.generation += 1;
                let locate = state.user_location.is_none() && !state.locating;
                state.locating |= locate;
                RefreshPlan::Fetch {
                    generation: state.generation,
                    locate,
                }
            }
        };

        let RefreshPlan::Fetch { generation, locate } = plan else {
            return self.mount().await;
        };
        info!(generation, locate, "refreshing task feed");

        let (location, tasks) = tokio::join!(
            async {
                if locate {
                    Some(self.location.request_location().await)
                } else {
                    None
                }
            },
            self.repository.fetch_tasks()
        );
        if let Some(result) = location {
            self.apply_location(result);
        }
        self.apply_tasks(generation, tasks)
    }

    fn apply_location(&self, result: LocationResult<Coordinates>) {
        let mut state = self.write_state();
        state.locating = false;
        if state.user_location.is_some() {
            return;
        }
        match result {
            Ok(position) => {
                debug!(
                    latitude = position.latitude(),
                    longitude = position.longitude(),
                    "user location acquired"
                );
                state.user_location = Some(position);
                state.location_error = None;
            }
            Err(err) => {
                info!(error = %err, "continuing without user location");
                state.location_error = Some(err);
            }
        }
    }

    fn apply_tasks(
        &self,
        generation: u64,
        result: TaskRepositoryResult<Vec<TaskRecord>>,
    ) -> FeedPhase {
        let mut state = self.write_state();
        if generation != state.generation {
            debug!(
                generation,
                latest = state.generation,
                "discarding stale task response"
            );
            return state.phase;
        }

        match result {
            Ok(tasks) => {
                info!(count = tasks.len(), "task feed loaded");
                state.tasks = tasks;
                state.error = None;
                state.last_updated = Some(self.clock.utc());
                state.transition(FeedPhase::Ready);
            }
            Err(err) => {
                warn!(error = %err, kept = state.tasks.len(), "task fetch failed");
                state.error = Some(err.kind());
                state.transition(FeedPhase::Failed);
            }
        }
        state.phase
    }

    /// Replaces the search query.
    pub fn set_search_query(&self, query: impl Into<String>) {
        self.write_state().filter.set_search_query(query);
    }

    /// Replaces the category selection.
    pub fn set_category(&self, category: CategoryFilter) {
        self.write_state().filter.set_category(category);
    }

    /// Replaces the whole filter.
    pub fn set_filter(&self, filter: FilterState) {
        self.write_state().filter = filter;
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> FeedPhase {
        self.read_state().phase
    }

    /// Looks up a loaded task by identifier, ignoring the filter.
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<TaskRecord> {
        self.read_state()
            .tasks
            .iter()
            .find(|task| task.id() == id)
            .cloned()
    }

    /// Returns the number of loaded tasks before filtering.
    #[must_use]
    pub fn loaded_count(&self) -> usize {
        self.read_state().tasks.len()
    }

    /// Returns a presentation snapshot with the filter applied.
    #[must_use]
    pub fn view(&self) -> FeedView {
        let state = self.read_state();
        FeedView {
            tasks: compute_visible_tasks_within(
                &state.tasks,
                state.user_location,
                &state.filter,
                self.radius,
            ),
            phase: state.phase,
            loading: state.phase == FeedPhase::Loading,
            refreshing: state.phase == FeedPhase::Refreshing,
            error: state.error,
            location_error: state.location_error.map(LocationError::kind),
            filter: state.filter.clone(),
            user_location: state.user_location,
            last_updated: state.last_updated,
        }
    }
}
