//! Repository port for reading and creating task records on the remote
//! task service.

use crate::feed::domain::{BearerToken, FeedErrorKind, TaskDraft, TaskRecord};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Remote task service contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Fetches the full current task set in service order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError`] on transport failure, non-success
    /// status, or an undecodable payload.
    async fn fetch_tasks(&self) -> TaskRepositoryResult<Vec<TaskRecord>>;

    /// Creates a task and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Unauthenticated`] when the service
    /// rejects the token, plus the failure modes of
    /// [`TaskRepository::fetch_tasks`].
    async fn create_task(
        &self,
        draft: &TaskDraft,
        token: &BearerToken,
    ) -> TaskRepositoryResult<TaskRecord>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// Transport-level failure, including timeouts.
    #[error("network error: {0}")]
    Network(Arc<dyn std::error::Error + Send + Sync>),

    /// The service answered with a non-success status.
    #[error("unexpected response status {0}")]
    UnexpectedStatus(u16),

    /// A credential was required but missing or rejected.
    #[error("request is not authenticated")]
    Unauthenticated,

    /// The response body could not be decoded.
    #[error("malformed response: {0}")]
    MalformedResponse(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a transport error.
    pub fn network(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Network(Arc::new(err))
    }

    /// Wraps a decoding error.
    pub fn malformed(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::MalformedResponse(Arc::new(err))
    }

    /// Returns the presentation-facing error kind.
    #[must_use]
    pub const fn kind(&self) -> FeedErrorKind {
        match self {
            Self::Network(_) | Self::UnexpectedStatus(_) => FeedErrorKind::Network,
            Self::Unauthenticated => FeedErrorKind::Unauthenticated,
            Self::MalformedResponse(_) => FeedErrorKind::MalformedResponse,
        }
    }
}
