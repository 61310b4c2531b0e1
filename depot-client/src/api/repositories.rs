use depot_api_types::{
    Repository, RepositoryCreate, RepositoryVersion, ResourceHref, SyncRequest, TaskHandle,
};
use std::sync::Arc;
use tracing::info;

use crate::client::DepotClient;
use crate::error::ClientError;

/// Repository CRUD and sync submission
pub struct RepositoriesApi {
    client: Arc<DepotClient>,
}

impl RepositoriesApi {
    pub fn new(client: Arc<DepotClient>) -> Self {
        Self { client }
    }

    /// Create a repository; completes synchronously
    pub async fn create(&self, body: &RepositoryCreate) -> Result<Repository, ClientError> {
        let url = self.client.collection_url("repositories/")?;
        let repo: Repository = self.client.post_json(&url, body).await?;
        info!("Created repository {} at {}", repo.name, repo.href);
        Ok(repo)
    }

    pub async fn read(&self, href: &ResourceHref) -> Result<Repository, ClientError> {
        let url = self.client.resource_url(href)?;
        self.client.get_json(&url).await
    }

    /// Delete queues server-side cleanup and returns the task handle
    pub async fn delete(&self, href: &ResourceHref) -> Result<TaskHandle, ClientError> {
        let url = self.client.resource_url(href)?;
        let body = self.client.delete(&url).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Submit a sync from `body.remote` into the repository.
    ///
    /// The returned handle must be monitored; the repository is unchanged
    /// until the task completes.
    pub async fn sync(
        &self,
        href: &ResourceHref,
        body: &SyncRequest,
    ) -> Result<TaskHandle, ClientError> {
        let base = self.client.resource_url(href)?;
        let url = format!("{}/sync/", base.trim_end_matches('/'));
        let handle: TaskHandle = self.client.post_json(&url, body).await?;
        info!("Queued sync of {} as task {}", href, handle.task);
        Ok(handle)
    }

    /// Fetch the newest version record, or `None` before the first sync
    pub async fn latest_version(
        &self,
        repository: &Repository,
    ) -> Result<Option<RepositoryVersion>, ClientError> {
        match &repository.latest_version_href {
            Some(href) => {
                let url = self.client.resource_url(href)?;
                Ok(Some(self.client.get_json(&url).await?))
            }
            None => Ok(None),
        }
    }
}
