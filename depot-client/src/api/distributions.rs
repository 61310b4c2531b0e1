use depot_api_types::{Distribution, DistributionCreate, ResourceHref, TaskHandle};
use std::sync::Arc;
use tracing::info;

use crate::client::DepotClient;
use crate::error::ClientError;

/// Distribution submission and CRUD
pub struct DistributionsApi {
    client: Arc<DepotClient>,
}

impl DistributionsApi {
    pub fn new(client: Arc<DepotClient>) -> Self {
        Self { client }
    }

    /// Wiring a distribution to the serving layer is a task.
    ///
    /// The distribution href arrives in the completed task's
    /// `created_resources`; read it to learn the externally reachable
    /// `base_url`.
    pub async fn create(&self, body: &DistributionCreate) -> Result<TaskHandle, ClientError> {
        let url = self.client.collection_url("distributions/")?;
        let handle: TaskHandle = self.client.post_json(&url, body).await?;
        info!(
            "Queued distribution {} at base path {} as task {}",
            body.name, body.base_path, handle.task
        );
        Ok(handle)
    }

    pub async fn read(&self, href: &ResourceHref) -> Result<Distribution, ClientError> {
        let url = self.client.resource_url(href)?;
        self.client.get_json(&url).await
    }

    /// Delete queues server-side cleanup and returns the task handle
    pub async fn delete(&self, href: &ResourceHref) -> Result<TaskHandle, ClientError> {
        let url = self.client.resource_url(href)?;
        let body = self.client.delete(&url).await?;
        Ok(serde_json::from_value(body)?)
    }
}
