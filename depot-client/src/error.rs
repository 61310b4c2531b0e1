//! Client error taxonomy

use depot_api_types::{ResourceHref, TaskErrorDetail, TaskState};
use depot_http::HttpError;
use std::time::Duration;
use thiserror::Error;

/// Errors from CRUD calls and response decoding
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Http(#[from] HttpError),

    #[error("Resource not found: {href}")]
    NotFound { href: String },

    #[error("Server rejected the request: HTTP {status}: {detail}")]
    Api { status: u16, detail: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(#[from] depot_config::ConfigError),

    #[error(transparent)]
    Task(#[from] TaskError),
}

impl ClientError {
    /// Whether retrying the same call can succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, ClientError::Http(e) if e.is_transient())
    }
}

/// Outcomes of waiting on an asynchronous task.
///
/// Every variant carries the task href and the elapsed wait so a failure
/// can be diagnosed without the caller re-deriving context.
#[derive(Debug, Error)]
pub enum TaskError {
    /// The server reported a terminal failure state; never retried
    #[error("task {href} failed after {elapsed:?}: {}", .error.description)]
    Failed {
        href: ResourceHref,
        elapsed: Duration,
        error: TaskErrorDetail,
    },

    /// The wait budget ran out with the task still in a non-terminal state
    #[error("task {href} did not reach a terminal state within {elapsed:?} ({polls} polls)")]
    Timeout {
        href: ResourceHref,
        elapsed: Duration,
        polls: u32,
    },

    /// The handle no longer resolves to a task (retention expired or bogus)
    #[error("task {href} no longer resolvable after {elapsed:?}")]
    NotFound {
        href: ResourceHref,
        elapsed: Duration,
    },

    /// The server reported an impossible state transition; contract breach
    #[error("task {href} made an impossible transition from {from} to {to} after {elapsed:?}")]
    InvariantViolation {
        href: ResourceHref,
        from: TaskState,
        to: TaskState,
        elapsed: Duration,
    },

    /// A non-transient client-side error interrupted polling
    #[error("error while polling task {href} after {elapsed:?}: {source}")]
    Poll {
        href: ResourceHref,
        elapsed: Duration,
        #[source]
        source: Box<ClientError>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_error_messages_carry_href_and_elapsed() {
        let err = TaskError::Timeout {
            href: "/api/v3/tasks/1/".into(),
            elapsed: Duration::from_secs(5),
            polls: 5,
        };
        let message = err.to_string();
        assert!(message.contains("/api/v3/tasks/1/"));
        assert!(message.contains("5 polls"));
    }

    #[test]
    fn test_transient_classification_follows_http() {
        let err = ClientError::Http(HttpError::ServerError { status: 502 });
        assert!(err.is_transient());
        let err = ClientError::NotFound {
            href: "/api/v3/tasks/1/".to_string(),
        };
        assert!(!err.is_transient());
    }
}
