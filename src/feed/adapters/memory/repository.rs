//! In-memory task repository for feed tests and local runs.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, PoisonError, RwLock};

use crate::feed::{
    domain::{BearerToken, TaskDraft, TaskId, TaskRecord},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Queued failures are returned by the next fetches before the stored task
/// set is served again.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: Vec<TaskRecord>,
    queued_failures: VecDeque<TaskRepositoryError>,
    fetch_count: usize,
    next_id: u64,
}

fn lock_error(err: impl ToString) -> TaskRepositoryError {
    TaskRepositoryError::network(std::io::Error::other(err.to_string()))
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository serving the given tasks.
    #[must_use]
    pub fn with_tasks(tasks: Vec<TaskRecord>) -> Self {
        let repository = Self::new();
        repository
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .tasks = tasks;
        repository
    }

    /// Replaces the served task set.
    ///
    /// # Errors
    ///
    /// Returns a repository error when lock acquisition fails.
    pub fn replace_tasks(&self, tasks: Vec<TaskRecord>) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.tasks = tasks;
        Ok(())
    }

    /// Queues a failure for the next fetch.
    ///
    /// # Errors
    ///
    /// Returns a repository error when lock acquisition fails.
    pub fn fail_next_fetch(&self, err: TaskRepositoryError) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.queued_failures.push_back(err);
        Ok(())
    }

    /// Returns how many fetches have been served, failures included.
    ///
    /// # Errors
    ///
    /// Returns a repository error when lock acquisition fails.
    pub fn fetch_count(&self) -> TaskRepositoryResult<usize> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.fetch_count)
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn fetch_tasks(&self) -> TaskRepositoryResult<Vec<TaskRecord>> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.fetch_count += 1;
        if let Some(err) = state.queued_failures.pop_front() {
            return Err(err);
        }
        Ok(state.tasks.clone())
    }

    async fn create_task(
        &self,
        draft: &TaskDraft,
        _token: &BearerToken,
    ) -> TaskRepositoryResult<TaskRecord> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.next_id += 1;
        let id = TaskId::new(format!("local-{}", state.next_id));

        let mut record = TaskRecord::new(
            id,
            draft.title(),
            draft.budget(),
            draft.category().as_str(),
            draft.due_date(),
        );
        if let Some(description) = draft.description() {
            record = record.with_description(description);
        }
        if let Some(location) = draft.location() {
            record = record.with_location(location);
        }

        state.tasks.push(record.clone());
        Ok(record)
    }
}
