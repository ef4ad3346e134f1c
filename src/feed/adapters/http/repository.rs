//! HTTP adapter for the remote task service.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header::AUTHORIZATION};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::FeedConfig;
use crate::feed::{
    domain::{BearerToken, TaskDraft, TaskRecord},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Path of the task collection relative to the API base URL.
const TASKS_PATH: &str = "/api/tasks";

/// Task repository backed by the remote JSON API.
#[derive(Debug, Clone)]
pub struct HttpTaskRepository {
    client: Client,
    tasks_url: String,
}

impl HttpTaskRepository {
    /// Creates a repository using the API URL and timeout from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Network`] when the HTTP client cannot
    /// be built.
    pub fn new(config: &FeedConfig) -> TaskRepositoryResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(TaskRepositoryError::network)?;
        Ok(Self::with_client(client, config.api_url()))
    }

    /// Creates a repository from an existing client.
    #[must_use]
    pub fn with_client(client: Client, api_url: &str) -> Self {
        Self {
            client,
            tasks_url: format!("{}{TASKS_PATH}", api_url.trim_end_matches('/')),
        }
    }

    /// Returns the task collection URL.
    #[must_use]
    pub fn tasks_url(&self) -> &str {
        &self.tasks_url
    }
}

/// Maps the response status and decodes a JSON body.
async fn decode_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> TaskRepositoryResult<T> {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(TaskRepositoryError::Unauthenticated);
    }
    if !status.is_success() {
        return Err(TaskRepositoryError::UnexpectedStatus(status.as_u16()));
    }

    let body = response
        .bytes()
        .await
        .map_err(TaskRepositoryError::network)?;
    serde_json::from_slice(&body).map_err(TaskRepositoryError::malformed)
}

#[async_trait]
impl TaskRepository for HttpTaskRepository {
    async fn fetch_tasks(&self) -> TaskRepositoryResult<Vec<TaskRecord>> {
        debug!(url = %self.tasks_url, "fetching tasks");
        let response = self
            .client
            .get(&self.tasks_url)
            .send()
            .await
            .map_err(TaskRepositoryError::network)?;

        let tasks: Vec<TaskRecord> = decode_response(response).await.inspect_err(|err| {
            warn!(url = %self.tasks_url, error = %err, "task fetch failed");
        })?;
        debug!(count = tasks.len(), "fetched tasks");
        Ok(tasks)
    }

    async fn create_task(
        &self,
        draft: &TaskDraft,
        token: &BearerToken,
    ) -> TaskRepositoryResult<TaskRecord> {
        debug!(url = %self.tasks_url, title = draft.title(), "posting task");
        let response = self
            .client
            .post(&self.tasks_url)
            .header(AUTHORIZATION, token.header_value())
            .json(draft)
            .send()
            .await
            .map_err(TaskRepositoryError::network)?;

        let created: TaskRecord = decode_response(response).await.inspect_err(|err| {
            warn!(url = %self.tasks_url, error = %err, "task creation failed");
        })?;
        debug!(id = %created.id(), "task created");
        Ok(created)
    }
}
