use depot_api_types::{Remote, RemoteCreate, ResourceHref, TaskHandle};
use std::sync::Arc;
use tracing::info;

use crate::client::DepotClient;
use crate::error::ClientError;

/// Remote CRUD
pub struct RemotesApi {
    client: Arc<DepotClient>,
}

impl RemotesApi {
    pub fn new(client: Arc<DepotClient>) -> Self {
        Self { client }
    }

    /// Create a remote; completes synchronously
    pub async fn create(&self, body: &RemoteCreate) -> Result<Remote, ClientError> {
        let url = self.client.collection_url("remotes/")?;
        let remote: Remote = self.client.post_json(&url, body).await?;
        info!(
            "Created remote {} for {} (policy {})",
            remote.name, remote.url, remote.policy
        );
        Ok(remote)
    }

    pub async fn read(&self, href: &ResourceHref) -> Result<Remote, ClientError> {
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
