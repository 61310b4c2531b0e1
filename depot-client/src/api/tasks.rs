use depot_api_types::{ResourceHref, Task};
use std::sync::Arc;

use crate::client::DepotClient;
use crate::error::ClientError;

/// Read-only view of server-side tasks.
///
/// Tasks are created by submission calls on the other collections; this
/// binding only observes them. The task monitor drives `read` in a loop.
pub struct TasksApi {
    client: Arc<DepotClient>,
}

impl TasksApi {
    pub fn new(client: Arc<DepotClient>) -> Self {
        Self { client }
    }

    pub async fn read(&self, href: &ResourceHref) -> Result<Task, ClientError> {
        let url = self.client.resource_url(href)?;
        self.client.get_json(&url).await
    }
}
