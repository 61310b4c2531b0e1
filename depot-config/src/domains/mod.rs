//! Domain-specific configuration modules

pub mod api;
pub mod http;
pub mod tasks;
pub mod utils;

use crate::error::ConfigResult;
use crate::validation::Validatable;
use serde::{Deserialize, Serialize};

/// Main depot client configuration combining all domains
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DepotConfig {
    /// API endpoint configuration
    #[serde(default)]
    pub api: api::ApiConfig,

    /// HTTP transport configuration
    #[serde(default)]
    pub http: http::HttpConfig,

    /// Task monitoring configuration
    #[serde(default)]
    pub tasks: tasks::TasksConfig,
}

impl DepotConfig {
    /// Validate all domain configurations
    pub fn validate_all(&self) -> ConfigResult<()> {
        self.api.validate()?;
        self.http.validate()?;
        self.tasks.validate()?;
        Ok(())
    }
}
