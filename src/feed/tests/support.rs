//! Shared fixtures for feed unit tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::oneshot;

use crate::feed::{
    domain::{BearerToken, Coordinates, EARTH_RADIUS_KM, TaskDraft, TaskId, TaskRecord},
    ports::{
        LocationError, LocationProvider, LocationResult, TaskRepository, TaskRepositoryError,
        TaskRepositoryResult,
    },
};

/// Times Square, used as the user position throughout the tests.
pub(super) fn user_position() -> Coordinates {
    Coordinates::new(40.758, -73.9855).expect("valid user position")
}

/// Point due north of `origin` at roughly `km` kilometres.
pub(super) fn north_of(origin: Coordinates, km: f64) -> Coordinates {
    Coordinates::new(
        origin.latitude() + (km / EARTH_RADIUS_KM).to_degrees(),
        origin.longitude(),
    )
    .expect("valid offset position")
}

pub(super) fn due_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 20).expect("valid date")
}

/// Task with a location `km` north of [`user_position`].
pub(super) fn task_at(id: &str, title: &str, category: &str, km: f64) -> TaskRecord {
    TaskRecord::new(TaskId::new(id), title, 100.0, category, due_date())
        .with_location(north_of(user_position(), km))
}

/// Task without a location.
pub(super) fn task_without_location(id: &str, title: &str, category: &str) -> TaskRecord {
    TaskRecord::new(TaskId::new(id), title, 100.0, category, due_date())
}

pub(super) fn ids(tasks: &[TaskRecord]) -> Vec<&str> {
    tasks.iter().map(|task| task.id().as_str()).collect()
}

/// Repository whose fetches wait for a response pushed by the test.
///
/// Each fetch consumes the oldest gate; fetches without a gate return an
/// empty task set.
#[derive(Default)]
pub(super) struct GatedTaskRepository {
    gates: Mutex<VecDeque<oneshot::Receiver<TaskRepositoryResult<Vec<TaskRecord>>>>>,
    started: AtomicUsize,
}

impl GatedTaskRepository {
    /// Registers a gate for the next fetch and returns its sender.
    pub(super) fn gate(&self) -> oneshot::Sender<TaskRepositoryResult<Vec<TaskRecord>>> {
        let (sender, receiver) = oneshot::channel();
        self.gates
            .lock()
            .expect("gate lock")
            .push_back(receiver);
        sender
    }

    /// Number of fetches that have started.
    pub(super) fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TaskRepository for GatedTaskRepository {
    async fn fetch_tasks(&self) -> TaskRepositoryResult<Vec<TaskRecord>> {
        let gate = self.gates.lock().expect("gate lock").pop_front();
        self.started.fetch_add(1, Ordering::SeqCst);
        match gate {
            Some(receiver) => receiver.await.unwrap_or_else(|_| {
                Err(TaskRepositoryError::network(std::io::Error::other(
                    "gate dropped",
                )))
            }),
            None => Ok(Vec::new()),
        }
    }

    async fn create_task(
        &self,
        _draft: &TaskDraft,
        _token: &BearerToken,
    ) -> TaskRepositoryResult<TaskRecord> {
        Err(TaskRepositoryError::UnexpectedStatus(501))
    }
}

/// Location provider whose requests wait for a fix pushed by the test.
#[derive(Default)]
pub(super) struct GatedLocationProvider {
    gates: Mutex<VecDeque<oneshot::Receiver<LocationResult<Coordinates>>>>,
    started: AtomicUsize,
}

impl GatedLocationProvider {
    /// Registers a gate for the next request and returns its sender.
    pub(super) fn gate(&self) -> oneshot::Sender<LocationResult<Coordinates>> {
        let (sender, receiver) = oneshot::channel();
        self.gates
            .lock()
            .expect("gate lock")
            .push_back(receiver);
        sender
    }

    /// Number of location requests that have started.
    pub(super) fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LocationProvider for GatedLocationProvider {
    async fn request_location(&self) -> LocationResult<Coordinates> {
        let gate = self.gates.lock().expect("gate lock").pop_front();
        self.started.fetch_add(1, Ordering::SeqCst);
        match gate {
            Some(receiver) => receiver
                .await
                .unwrap_or(Err(LocationError::PositionUnavailable)),
            None => Err(LocationError::PositionUnavailable),
        }
    }
}
