//! HTTP transport configuration

use depot_config::{ApiConfig, HttpConfig as ConfigHttpConfig};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Resolved transport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout
    pub timeout: Duration,

    /// Maximum number of redirects to follow
    pub max_redirects: u32,

    /// User agent string
    pub user_agent: String,

    /// Whether to verify TLS certificates
    pub verify_tls: bool,

    /// Bearer token sent with every request, if any
    pub token: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_redirects: 10,
            user_agent: format!("depot-client/{}", env!("CARGO_PKG_VERSION")),
            verify_tls: true,
            token: None,
        }
    }
}

impl HttpConfig {
    /// Merge the api and http configuration domains into one transport view
    pub fn from_config(api: &ApiConfig, http: &ConfigHttpConfig) -> Self {
        Self {
            timeout: http.timeout,
            max_redirects: http.max_redirects,
            user_agent: api.user_agent.clone(),
            verify_tls: http.verify_tls,
            token: api.token.clone(),
        }
    }
}
