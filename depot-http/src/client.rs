//! HTTP transport implementation

use crate::config::HttpConfig;
use crate::errors::HttpError;
use crate::types::HttpMethod;
use reqwest::{header, Client};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Status and decoded JSON body of one exchange.
///
/// Non-2xx responses are returned as values, not errors; the caller decides
/// what a 404 means for its resource.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: JsonValue,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport trait the API bindings sit on
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<&JsonValue>,
    ) -> Result<HttpResponse, HttpError>;
}

/// Transport over reqwest, with mock support for offline tests
#[derive(Debug, Clone, Default)]
pub struct HttpManager {
    offline: bool,
    mocks: HashMap<String, HttpResponse>,
    config: HttpConfig,
}

impl HttpManager {
    /// Create a new HttpManager in online mode with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpConfig::default())
    }

    /// Create a new HttpManager with specific configuration
    pub fn with_config(config: HttpConfig) -> Self {
        debug!(
            "Creating HttpManager with timeout: {}s",
            config.timeout.as_secs()
        );
        Self {
            offline: false,
            mocks: HashMap::new(),
            config,
        }
    }

    /// Set offline mode; every request must then hit a registered mock
    pub fn set_offline(&mut self) {
        self.offline = true;
        debug!("HttpManager set to offline mode");
    }

    /// Add a single mock response, keyed by method and URL
    pub fn add_mock(&mut self, method: HttpMethod, url: &str, status: u16, body: JsonValue) {
        let key = format!("{}:{}", method.as_str(), url);
        self.mocks.insert(key, HttpResponse { status, body });
        debug!("Added HTTP mock for {} {}", method, url);
    }

    /// Clear all mocks
    pub fn clear_mocks(&mut self) {
        self.mocks.clear();
        debug!("Cleared all HTTP mocks");
    }

    fn mock_response(&self, method: HttpMethod, url: &str) -> Result<HttpResponse, HttpError> {
        let key = format!("{}:{}", method.as_str(), url);
        match self.mocks.get(&key) {
            Some(response) => {
                debug!("Found matching mock response for {} {}", method, url);
                Ok(response.clone())
            }
            None => {
                debug!("No matching mock response found for {} {}", method, url);
                Err(HttpError::InvalidUrl(format!(
                    "No mock response available in offline mode for {} {}",
                    method, url
                )))
            }
        }
    }
}

#[async_trait::async_trait]
impl HttpTransport for HttpManager {
    async fn execute(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<&JsonValue>,
    ) -> Result<HttpResponse, HttpError> {
        debug!("{} {}", method, url);

        if self.offline {
            return self.mock_response(method, url);
        }

        let client = Client::builder()
            .timeout(self.config.timeout)
            .user_agent(&self.config.user_agent)
            .danger_accept_invalid_certs(!self.config.verify_tls)
            .redirect(reqwest::redirect::Policy::limited(
                self.config.max_redirects as usize,
            ))
            .build()?;

        let mut request = client.request(method.into(), url);

        if let Some(token) = &self.config.token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();

        debug!("HTTP response received: {} for {} {}", status, method, url);

        // DELETE and friends may legitimately return an empty body
        let text = response.text().await?;
        let body = if text.is_empty() {
            JsonValue::Null
        } else {
            serde_json::from_str(&text).unwrap_or_else(|_| {
                warn!("Response body is not JSON, passing through as text");
                JsonValue::String(text)
            })
        };

        Ok(HttpResponse { status, body })
    }
}
