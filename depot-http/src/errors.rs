//! HTTP error types

use crate::types::HttpMethodError;

/// Error type for HTTP operations
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(#[from] HttpMethodError),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Server error: HTTP {status}")]
    ServerError { status: u16 },
}

impl HttpError {
    /// Whether a retry has a chance of succeeding.
    ///
    /// Connection failures, request timeouts, and 5xx responses are
    /// transient; everything else is a permanent client-side problem.
    pub fn is_transient(&self) -> bool {
        match self {
            HttpError::NetworkError(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            HttpError::ServerError { status } => *status >= 500,
            _ => false,
        }
    }
}
