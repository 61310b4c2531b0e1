//! Server-owned resource records as they appear in responses

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::enums::{SyncPolicy, TaskState};
use crate::ids::ResourceHref;

/// One asynchronous server-side operation and its eventual outcome.
///
/// Immutable once `state` is terminal. `created_resources` is meaningful
/// only on a `Completed` record; the server leaves it empty or absent
/// otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub href: ResourceHref,
    pub state: TaskState,
    /// Hrefs of resources this task produced, in creation order
    #[serde(default)]
    pub created_resources: Vec<ResourceHref>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<TaskErrorDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
}

/// Failure detail reported by the server on a failed task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskErrorDetail {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traceback: Option<String>,
    /// Additional structured detail, passed through untouched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl TaskErrorDetail {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            traceback: None,
            data: None,
        }
    }
}

/// Response of every submission endpoint that queues a task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskHandle {
    /// Href of the queued task, to be fed to the task monitor
    pub task: ResourceHref,
}

/// A versioned content repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub href: ResourceHref,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Href of the newest repository version; absent before the first sync
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_version_href: Option<ResourceHref>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

/// An upstream source a repository syncs from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Remote {
    pub href: ResourceHref,
    pub name: String,
    pub url: String,
    pub policy: SyncPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

/// A frozen, servable rendition of one repository version
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    pub href: ResourceHref,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_version: Option<ResourceHref>,
}

/// An externally reachable endpoint serving a publication
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    pub href: ResourceHref,
    pub name: String,
    pub base_path: String,
    /// Full URL at which the published content is served; usable as a
    /// remote's `url` for a second sync
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication: Option<ResourceHref>,
}

/// One immutable version of a repository's content set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryVersion {
    pub href: ResourceHref,
    pub number: u64,
    pub content_summary: ContentSummary,
}

/// Aggregate counts of content units, keyed by content-type label.
///
/// Ordered maps so two summaries compare with plain equality.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContentSummary {
    #[serde(default)]
    pub present: BTreeMap<String, u64>,
    #[serde(default)]
    pub added: BTreeMap<String, u64>,
    #[serde(default)]
    pub removed: BTreeMap<String, u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_task_deserializes_without_optional_fields() {
        let task: Task = serde_json::from_value(json!({
            "href": "/api/v3/tasks/1/",
            "state": "waiting"
        }))
        .unwrap();
        assert_eq!(task.state, TaskState::Waiting);
        assert!(task.created_resources.is_empty());
        assert!(task.error.is_none());
    }

    #[test]
    fn test_completed_task_keeps_resource_order() {
        let task: Task = serde_json::from_value(json!({
            "href": "/api/v3/tasks/2/",
            "state": "completed",
            "created_resources": ["/pub/2/", "/pub/1/"]
        }))
        .unwrap();
        let hrefs: Vec<&str> = task.created_resources.iter().map(|h| h.as_str()).collect();
        assert_eq!(hrefs, vec!["/pub/2/", "/pub/1/"]);
    }

    #[test]
    fn test_content_summary_equality_ignores_key_order() {
        let a: ContentSummary = serde_json::from_value(json!({
            "present": {"package": 35, "advisory": 4}
        }))
        .unwrap();
        let b: ContentSummary = serde_json::from_value(json!({
            "present": {"advisory": 4, "package": 35}
        }))
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_task_error_detail_passthrough() {
        let task: Task = serde_json::from_value(json!({
            "href": "/api/v3/tasks/3/",
            "state": "failed",
            "error": {"description": "checksum mismatch", "data": {"reason": "checksum mismatch"}}
        }))
        .unwrap();
        let error = task.error.unwrap();
        assert_eq!(error.description, "checksum mismatch");
        assert_eq!(error.data.unwrap()["reason"], "checksum mismatch");
    }
}
