//! Configuration loading and environment variable handling

use crate::domains::DepotConfig;
use crate::error::{ConfigError, ConfigResult};
use std::path::Path;
use std::time::Duration;

/// Configuration loader with environment variable support
pub struct ConfigLoader {
    /// Environment variable prefix
    prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new config loader with default prefix
    pub fn new() -> Self {
        Self {
            prefix: "DEPOT".to_string(),
        }
    }

    /// Create a new config loader with custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Load configuration from a YAML file with environment overrides
    pub fn from_file(&self, path: impl AsRef<Path>) -> ConfigResult<DepotConfig> {
        let content = std::fs::read_to_string(path)?;
        let mut config: DepotConfig = serde_yaml::from_str(&content)?;

        self.apply_env_overrides(&mut config)?;
        config.validate_all()?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env(&self) -> ConfigResult<DepotConfig> {
        let mut config = DepotConfig::default();
        self.apply_env_overrides(&mut config)?;
        config.validate_all()?;
        Ok(config)
    }

    /// Load configuration with fallback chain
    pub fn load(&self, config_path: Option<impl AsRef<Path>>) -> ConfigResult<DepotConfig> {
        match config_path {
            Some(path) => self.from_file(path),
            None => self.from_env(),
        }
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(&self, config: &mut DepotConfig) -> ConfigResult<()> {
        if let Ok(base_url) = self.get_env_var("API_BASE_URL") {
            config.api.base_url = base_url;
        }

        if let Ok(token) = self.get_env_var("API_TOKEN") {
            config.api.token = Some(token);
        }

        if let Ok(timeout) = self.get_env_var("HTTP_TIMEOUT") {
            let seconds: u64 = timeout
                .parse()
                .map_err(|e| ConfigError::EnvError(format!("Invalid HTTP_TIMEOUT: {}", e)))?;
            config.http.timeout = Duration::from_secs(seconds);
        }

        if let Ok(verify_tls) = self.get_env_var("HTTP_VERIFY_TLS") {
            config.http.verify_tls = verify_tls
                .parse()
                .map_err(|e| ConfigError::EnvError(format!("Invalid HTTP_VERIFY_TLS: {}", e)))?;
        }

        if let Ok(interval) = self.get_env_var("TASK_POLL_INTERVAL_MS") {
            let millis: u64 = interval.parse().map_err(|e| {
                ConfigError::EnvError(format!("Invalid TASK_POLL_INTERVAL_MS: {}", e))
            })?;
            config.tasks.poll_interval = Duration::from_millis(millis);
        }

        if let Ok(timeout) = self.get_env_var("TASK_TIMEOUT_SECONDS") {
            let seconds: u64 = timeout.parse().map_err(|e| {
                ConfigError::EnvError(format!("Invalid TASK_TIMEOUT_SECONDS: {}", e))
            })?;
            config.tasks.timeout = Duration::from_secs(seconds);
        }

        Ok(())
    }

    fn get_env_var(&self, suffix: &str) -> Result<String, std::env::VarError> {
        std::env::var(format!("{}_{}", self.prefix, suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_file_reads_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "api:\n  base_url: \"http://depot.example/api/v3/\"\ntasks:\n  timeout: 15000"
        )
        .unwrap();

        let config = ConfigLoader::with_prefix("DEPOT_TEST_UNSET")
            .from_file(file.path())
            .unwrap();
        assert_eq!(config.api.base_url, "http://depot.example/api/v3/");
        assert_eq!(config.tasks.timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_env_override_wins_over_default() {
        // Prefix unique to this test to avoid cross-test env pollution
        std::env::set_var("DEPOT_LDRTEST_API_BASE_URL", "http://override.example/api/");
        let config = ConfigLoader::with_prefix("DEPOT_LDRTEST").from_env().unwrap();
        assert_eq!(config.api.base_url, "http://override.example/api/");
        std::env::remove_var("DEPOT_LDRTEST_API_BASE_URL");
    }

    #[test]
    fn test_invalid_env_value_is_reported() {
        std::env::set_var("DEPOT_BADENV_HTTP_TIMEOUT", "not-a-number");
        let result = ConfigLoader::with_prefix("DEPOT_BADENV").from_env();
        assert!(matches!(result, Err(ConfigError::EnvError(_))));
        std::env::remove_var("DEPOT_BADENV_HTTP_TIMEOUT");
    }
}
