//! Domain-driven configuration for the depot client
//!
//! Configuration is split by functional domain (API endpoint, HTTP
//! transport, task polling), with validation, serde defaults, and
//! environment variable support.

pub mod error;
pub mod loader;
pub mod validation;

// Domain-specific configuration modules
pub mod domains;

// Re-export main types
pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;

// Re-export domain configurations
pub use domains::{
    api::ApiConfig, http::HttpConfig, tasks::TasksConfig, DepotConfig,
};

// Re-export utilities
pub use domains::utils::serde_duration;
