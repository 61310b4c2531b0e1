//! Task monitoring configuration

use crate::error::ConfigResult;
use crate::validation::{validate_nonzero_duration, Validatable};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How the task monitor polls and how long it is willing to wait.
///
/// Status polls run at a fixed `poll_interval`; the retry fields apply only
/// to transient transport failures, never to task outcomes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TasksConfig {
    /// Fixed delay between task status polls
    #[serde(
        with = "crate::domains::utils::serde_duration",
        default = "default_poll_interval"
    )]
    pub poll_interval: Duration,

    /// Overall wait budget for one task to reach a terminal state
    #[serde(
        with = "crate::domains::utils::serde_duration",
        default = "default_timeout"
    )]
    pub timeout: Duration,

    /// Initial delay before retrying a transient transport error
    #[serde(
        with = "crate::domains::utils::serde_duration",
        default = "default_retry_initial_delay"
    )]
    pub retry_initial_delay: Duration,

    /// Cap on the transient-retry delay
    #[serde(
        with = "crate::domains::utils::serde_duration",
        default = "default_retry_max_delay"
    )]
    pub retry_max_delay: Duration,

    /// Whether to add jitter to transient-retry delays
    #[serde(default = "crate::domains::utils::default_true")]
    pub retry_jitter: bool,
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            poll_interval: default_poll_interval(),
            timeout: default_timeout(),
            retry_initial_delay: default_retry_initial_delay(),
            retry_max_delay: default_retry_max_delay(),
            retry_jitter: true,
        }
    }
}

impl Validatable for TasksConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_nonzero_duration(self.poll_interval, "poll_interval", self.domain_name())?;
        validate_nonzero_duration(self.timeout, "timeout", self.domain_name())?;
        if self.poll_interval > self.timeout {
            return Err(self.validation_error("poll_interval cannot exceed timeout"));
        }
        if self.retry_initial_delay > self.retry_max_delay {
            return Err(self.validation_error("retry_initial_delay cannot exceed retry_max_delay"));
        }
        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "tasks"
    }
}

fn default_poll_interval() -> Duration {
    Duration::from_secs(1)
}

fn default_timeout() -> Duration {
    Duration::from_secs(300)
}

fn default_retry_initial_delay() -> Duration {
    Duration::from_millis(250)
}

fn default_retry_max_delay() -> Duration {
    Duration::from_secs(10)
}
