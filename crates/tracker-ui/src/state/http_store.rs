//! Browser `fetch` client for the document store, via gloo-net.
//!
//! Wire decoding is shared with the native client through
//! `tracker_core::wire`; this module only moves bytes.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use tracker_core::{
    NewTask, Result, StoreConfig, StoreEndpoint, StoreError, Task, TaskFields, TaskId, TaskStore,
    wire,
};

/// Store client running on the browser event loop.
#[derive(Debug, Clone)]
pub struct HttpTaskStore {
    endpoint: StoreEndpoint,
}

impl HttpTaskStore {
    /// Build a client for the configured store.
    ///
    /// # Errors
    /// Returns `StoreError::InvalidUrl` if the base URL is unusable.
    pub fn new(config: &StoreConfig) -> Result<Self> {
        Ok(Self {
            endpoint: StoreEndpoint::new(config)?,
        })
    }
}

fn transport(err: gloo_net::Error) -> StoreError {
    StoreError::transport(err.to_string())
}

/// Read the body of a response, rejecting non-2xx statuses.
async fn success_body(response: Response) -> Result<String> {
    if !response.ok() {
        return Err(StoreError::UnexpectedStatus {
            status: response.status(),
        });
    }
    response.text().await.map_err(transport)
}

/// Decode a collection read. A body that cannot be read is a transport
/// failure; a readable body that is not a task map is an empty list.
fn decode_collection_body(
    body: std::result::Result<String, gloo_net::Error>,
) -> Result<Vec<Task>> {
    let body = body.map_err(transport)?;
    Ok(wire::decode_collection(&body))
}

#[async_trait(?Send)]
impl TaskStore for HttpTaskStore {
    async fn list(&self) -> Result<Vec<Task>> {
        let url = self.endpoint.collection_url()?;
        let response = Request::get(url.as_str()).send().await.map_err(transport)?;
        decode_collection_body(response.text().await)
    }

    async fn get(&self, id: &TaskId) -> Result<Task> {
        let url = self.endpoint.record_url(id)?;
        let response = Request::get(url.as_str()).send().await.map_err(transport)?;
        let body = success_body(response).await?;
        wire::decode_record(id, &body)
    }

    async fn create(&self, task: &NewTask) -> Result<Task> {
        let url = self.endpoint.collection_url()?;
        let response = Request::post(url.as_str())
            .json(task)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        let body = success_body(response).await?;
        let id = wire::decode_created_key(&body)?;
        Ok(task.clone().with_id(id))
    }

    async fn remove(&self, id: &TaskId) -> Result<()> {
        let url = self.endpoint.record_url(id)?;
        let response = Request::delete(url.as_str())
            .send()
            .await
            .map_err(transport)?;
        match response.status() {
            200 => Ok(()),
            status => Err(StoreError::UnexpectedStatus { status }),
        }
    }

    async fn replace(&self, id: &TaskId, fields: &TaskFields) -> Result<TaskFields> {
        let url = self.endpoint.record_url(id)?;
        let response = Request::put(url.as_str())
            .json(fields)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        let body = success_body(response).await?;
        wire::decode_fields(&body)
    }
}
