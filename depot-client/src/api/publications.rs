use depot_api_types::{Publication, PublicationCreate, ResourceHref, TaskHandle};
use std::sync::Arc;
use tracing::info;

use crate::client::DepotClient;
use crate::error::ClientError;

/// Publication submission and CRUD
pub struct PublicationsApi {
    client: Arc<DepotClient>,
}

impl PublicationsApi {
    pub fn new(client: Arc<DepotClient>) -> Self {
        Self { client }
    }

    /// Publishing renders repository metadata, so creation is a task.
    ///
    /// The publication href arrives in the completed task's
    /// `created_resources`, not in this response.
    pub async fn create(&self, body: &PublicationCreate) -> Result<TaskHandle, ClientError> {
        let url = self.client.collection_url("publications/")?;
        let handle: TaskHandle = self.client.post_json(&url, body).await?;
        info!(
            "Queued publication of {} as task {}",
            body.repository, handle.task
        );
        Ok(handle)
    }

    pub async fn read(&self, href: &ResourceHref) -> Result<Publication, ClientError> {
        let url = self.client.resource_url(href)?;
        self.client.get_json(&url).await
    }

    /// Publications delete synchronously; nothing to monitor
    pub async fn delete(&self, href: &ResourceHref) -> Result<(), ClientError> {
        let url = self.client.resource_url(href)?;
        self.client.delete(&url).await?;
        Ok(())
    }
}
