//! Service for posting new tasks with the stored credential.

use crate::feed::{
    domain::{FeedDomainError, TaskDraft, TaskRecord},
    ports::{CredentialStore, CredentialStoreError, TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Service-level errors for task posting.
#[derive(Debug, Error)]
pub enum TaskPostingError {
    /// Draft validation failed.
    #[error(transparent)]
    Domain(#[from] FeedDomainError),
    /// No credential is stored.
    #[error("no stored credential; sign in before posting")]
    Unauthenticated,
    /// The credential store could not be read.
    #[error(transparent)]
    Credentials(#[from] CredentialStoreError),
    /// The task service rejected or failed the request.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task posting operations.
pub type TaskPostingResult<T> = Result<T, TaskPostingError>;

/// Task posting service.
#[derive(Clone)]
pub struct TaskPostingService<R, S, C>
where
    R: TaskRepository,
    S: CredentialStore,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    credentials: Arc<S>,
    clock: Arc<C>,
}

impl<R, S, C> TaskPostingService<R, S, C>
where
    R: TaskRepository,
    S: CredentialStore,
    C: Clock + Send + Sync,
{
    /// Creates a new task posting service.
    #[must_use]
    pub const fn new(repository: Arc<R>, credentials: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            repository,
            credentials,
            clock,
        }
    }

    /// Posts a new task.
    ///
    /// The due date is checked against today's date first; a missing
    /// credential stops the request before any network call.
    ///
    /// # Errors
    ///
    /// Returns [`TaskPostingError::Domain`] for a past due date,
    /// [`TaskPostingError::Unauthenticated`] when no token is stored, and
    /// credential or repository errors otherwise.
    pub async fn post(&self, draft: TaskDraft) -> TaskPostingResult<TaskRecord> {
        draft.ensure_due_on_or_after(self.clock.utc().date_naive())?;

        let Some(token) = self.credentials.read_token().await? else {
            warn!(title = draft.title(), "refusing to post task without a credential");
            return Err(TaskPostingError::Unauthenticated);
        };

        let created = self.repository.create_task(&draft, &token).await?;
        info!(id = %created.id(), category = draft.category().as_str(), "task posted");
        Ok(created)
    }
}
