//! `TaskStore` over HTTP using reqwest.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tracing::debug;
use tracker_core::{
    NewTask, Result, StoreEndpoint, StoreError, Task, TaskFields, TaskId, TaskStore, wire,
};

use crate::config::TrackerConfig;

/// Store client for the hosted JSON document store.
#[derive(Debug, Clone)]
pub struct RestTaskStore {
    endpoint: StoreEndpoint,
    http: Client,
}

impl RestTaskStore {
    /// Build a client from configuration.
    ///
    /// # Errors
    /// Returns `StoreError::InvalidUrl` for a bad base URL and
    /// `StoreError::Transport` if the HTTP client cannot be built.
    pub fn new(config: &TrackerConfig) -> Result<Self> {
        let endpoint = StoreEndpoint::new(&config.store)?;
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| StoreError::transport(e.to_string()))?;
        Ok(Self { endpoint, http })
    }
}

fn transport(err: reqwest::Error) -> StoreError {
    StoreError::transport(err.to_string())
}

/// Read the body of a successful response.
async fn success_body(response: Response) -> Result<String> {
    let status = response.status();
    if !status.is_success() {
        return Err(StoreError::UnexpectedStatus {
            status: status.as_u16(),
        });
    }
    response.text().await.map_err(transport)
}

#[async_trait(?Send)]
impl TaskStore for RestTaskStore {
    async fn list(&self) -> Result<Vec<Task>> {
        let url = self.endpoint.collection_url()?;
        debug!(%url, "GET collection");
        let response = self.http.get(url).send().await.map_err(transport)?;
        // Error statuses carry bodies that are not task maps; they decode as
        // an empty list like any other malformed body.
        let body = response.text().await.map_err(transport)?;
        Ok(wire::decode_collection(&body))
    }

    async fn get(&self, id: &TaskId) -> Result<Task> {
        let url = self.endpoint.record_url(id)?;
        debug!(%url, "GET record");
        let response = self.http.get(url).send().await.map_err(transport)?;
        let body = success_body(response).await?;
        wire::decode_record(id, &body)
    }

    async fn create(&self, task: &NewTask) -> Result<Task> {
        let url = self.endpoint.collection_url()?;
        debug!(%url, "POST record");
        let response = self
            .http
            .post(url)
            .json(task)
            .send()
            .await
            .map_err(transport)?;
        let body = success_body(response).await?;
        let id = wire::decode_created_key(&body)?;
        Ok(task.clone().with_id(id))
    }

    async fn remove(&self, id: &TaskId) -> Result<()> {
        let url = self.endpoint.record_url(id)?;
        debug!(%url, "DELETE record");
        let response = self.http.delete(url).send().await.map_err(transport)?;
        let status = response.status();
        if status == StatusCode::OK {
            Ok(())
        } else {
            Err(StoreError::UnexpectedStatus {
                status: status.as_u16(),
            })
        }
    }

    async fn replace(&self, id: &TaskId, fields: &TaskFields) -> Result<TaskFields> {
        let url = self.endpoint.record_url(id)?;
        debug!(%url, "PUT record");
        let response = self
            .http
            .put(url)
            .json(fields)
            .send()
            .await
            .map_err(transport)?;
        let body = success_body(response).await?;
        wire::decode_fields(&body)
    }
}
