//! API endpoint configuration

use crate::error::ConfigResult;
use crate::validation::{validate_url, Validatable};
use serde::{Deserialize, Serialize};

/// Where the depot server lives and how to identify to it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the server's API root, e.g. `http://depot.example/api/v3/`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token sent with every request, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
            user_agent: default_user_agent(),
        }
    }
}

impl Validatable for ApiConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_url(&self.base_url, "base_url", self.domain_name())?;
        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "api"
    }
}

fn default_base_url() -> String {
    "http://localhost:24817/api/v3/".to_string()
}

fn default_user_agent() -> String {
    format!("depot-client/{}", env!("CARGO_PKG_VERSION"))
}
