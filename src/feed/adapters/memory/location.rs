//! In-memory location providers.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::feed::{
    domain::Coordinates,
    ports::{LocationError, LocationProvider, LocationResult},
};

/// Provider that always reports the same position.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocationProvider {
    position: Coordinates,
}

impl FixedLocationProvider {
    /// Creates a provider reporting `position`.
    #[must_use]
    pub const fn new(position: Coordinates) -> Self {
        Self { position }
    }
}

#[async_trait]
impl LocationProvider for FixedLocationProvider {
    async fn request_location(&self) -> LocationResult<Coordinates> {
        Ok(self.position)
    }
}

/// Provider replaying queued outcomes in order.
///
/// Once the queue is exhausted every request reports
/// [`LocationError::PositionUnavailable`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedLocationProvider {
    outcomes: Arc<Mutex<ScriptedOutcomes>>,
}

#[derive(Debug, Default)]
struct ScriptedOutcomes {
    queued: VecDeque<LocationResult<Coordinates>>,
    requests: usize,
}

impl ScriptedLocationProvider {
    /// Creates a provider replaying `outcomes`.
    #[must_use]
    pub fn new(outcomes: impl IntoIterator<Item = LocationResult<Coordinates>>) -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(ScriptedOutcomes {
                queued: outcomes.into_iter().collect(),
                requests: 0,
            })),
        }
    }

    /// Creates a provider whose user refuses permission on the first request.
    #[must_use]
    pub fn denied() -> Self {
        Self::default().then(Err(LocationError::PermissionDenied))
    }

    fn outcomes(&self) -> MutexGuard<'_, ScriptedOutcomes> {
        self.outcomes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends an outcome to the queue.
    #[must_use]
    pub fn then(self, outcome: LocationResult<Coordinates>) -> Self {
        self.outcomes().queued.push_back(outcome);
        self
    }

    /// Returns how many requests have been made.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.outcomes().requests
    }
}

#[async_trait]
impl LocationProvider for ScriptedLocationProvider {
    async fn request_location(&self) -> LocationResult<Coordinates> {
        let mut outcomes = self.outcomes();
        outcomes.requests += 1;
        outcomes
            .queued
            .pop_front()
            .unwrap_or(Err(LocationError::PositionUnavailable))
    }
}
