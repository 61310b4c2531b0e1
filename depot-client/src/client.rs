//! Shared client handle the API bindings hang off

use depot_api_types::ResourceHref;
use depot_config::{DepotConfig, TasksConfig};
use depot_http::{HttpConfig, HttpManager, HttpMethod, HttpResponse, HttpTransport};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tracing::debug;
use url::Url;

use crate::api::{DistributionsApi, PublicationsApi, RemotesApi, RepositoriesApi, TasksApi};
use crate::error::ClientError;
use crate::monitor::TaskMonitor;

/// Handle to one depot server.
///
/// Cheap to share behind an `Arc`; holds no mutable state beyond the
/// transport's connection pool.
pub struct DepotClient {
    base_url: Url,
    transport: Arc<dyn HttpTransport>,
    tasks_config: TasksConfig,
}

impl DepotClient {
    /// Build a client from full configuration, using the reqwest transport
    pub fn from_config(config: DepotConfig) -> Result<Arc<Self>, ClientError> {
        config.validate_all()?;
        let transport = HttpManager::with_config(HttpConfig::from_config(&config.api, &config.http));
        Self::with_transport(&config.api.base_url, Arc::new(transport), config.tasks)
    }

    /// Build a client over a caller-supplied transport.
    ///
    /// `base_url` must point at the server's API root, e.g.
    /// `http://depot.example/api/v3/`.
    pub fn with_transport(
        base_url: &str,
        transport: Arc<dyn HttpTransport>,
        tasks_config: TasksConfig,
    ) -> Result<Arc<Self>, ClientError> {
        let base_url = Url::parse(base_url)?;
        debug!("Creating DepotClient for {}", base_url);
        Ok(Arc::new(Self {
            base_url,
            transport,
            tasks_config,
        }))
    }

    /// Task monitoring settings this client was configured with
    pub fn tasks_config(&self) -> &TasksConfig {
        &self.tasks_config
    }

    /// Repository CRUD and sync submission
    pub fn repositories(self: &Arc<Self>) -> RepositoriesApi {
        RepositoriesApi::new(Arc::clone(self))
    }

    /// Remote CRUD
    pub fn remotes(self: &Arc<Self>) -> RemotesApi {
        RemotesApi::new(Arc::clone(self))
    }

    /// Publication submission and CRUD
    pub fn publications(self: &Arc<Self>) -> PublicationsApi {
        PublicationsApi::new(Arc::clone(self))
    }

    /// Distribution submission and CRUD
    pub fn distributions(self: &Arc<Self>) -> DistributionsApi {
        DistributionsApi::new(Arc::clone(self))
    }

    /// Task status reads
    pub fn tasks(self: &Arc<Self>) -> TasksApi {
        TasksApi::new(Arc::clone(self))
    }

    /// Monitor using the configured poll interval and timeout
    pub fn task_monitor(self: &Arc<Self>) -> TaskMonitor {
        TaskMonitor::new(Arc::clone(self))
    }

    /// URL of a collection endpoint under the API root
    pub(crate) fn collection_url(&self, collection: &str) -> Result<String, ClientError> {
        Ok(self.base_url.join(collection)?.to_string())
    }

    /// URL of a server-assigned href; absolute hrefs replace the root path
    pub(crate) fn resource_url(&self, href: &ResourceHref) -> Result<String, ClientError> {
        Ok(self.base_url.join(href.as_str())?.to_string())
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        let response = self.transport.execute(HttpMethod::Get, url, None).await?;
        let body = check_status(url, response)?;
        Ok(serde_json::from_value(body)?)
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let body = serde_json::to_value(body)?;
        let response = self
            .transport
            .execute(HttpMethod::Post, url, Some(&body))
            .await?;
        let body = check_status(url, response)?;
        Ok(serde_json::from_value(body)?)
    }

    pub(crate) async fn delete(&self, url: &str) -> Result<JsonValue, ClientError> {
        let response = self.transport.execute(HttpMethod::Delete, url, None).await?;
        check_status(url, response)
    }
}

/// Map a raw response onto the client error taxonomy.
///
/// 5xx is folded into the transport error type so transient classification
/// lives in one place.
fn check_status(url: &str, response: HttpResponse) -> Result<JsonValue, ClientError> {
    match response.status {
        404 | 410 => Err(ClientError::NotFound {
            href: url.to_string(),
        }),
        status if status >= 500 => Err(ClientError::Http(depot_http::HttpError::ServerError {
            status,
        })),
        status if !(200..300).contains(&status) => Err(ClientError::Api {
            status,
            detail: response.body.to_string(),
        }),
        _ => Ok(response.body),
    }
}
