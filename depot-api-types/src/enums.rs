use serde::{Deserialize, Serialize};

/// Wire enums shared across the API surface

/// Lifecycle state of an asynchronous server-side task.
///
/// `Waiting` and `Running` are the only non-terminal states. A task never
/// leaves a terminal state; observing such a transition means the server
/// broke its contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    Waiting,
    Running,
    Completed,
    Failed,
    Canceled,
}

impl TaskState {
    /// Whether the task can still change state
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TaskState::Completed | TaskState::Failed | TaskState::Canceled
        )
    }

    /// String form as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskState::Waiting => "waiting",
            TaskState::Running => "running",
            TaskState::Completed => "completed",
            TaskState::Failed => "failed",
            TaskState::Canceled => "canceled",
        }
    }
}

impl std::fmt::Display for TaskState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Download policy for a remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SyncPolicy {
    #[default]
    Immediate,
    OnDemand,
    Streamed,
}

impl SyncPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncPolicy::Immediate => "immediate",
            SyncPolicy::OnDemand => "on_demand",
            SyncPolicy::Streamed => "streamed",
        }
    }

    /// All policies the server accepts, in documentation order
    pub fn all() -> &'static [SyncPolicy] {
        &[
            SyncPolicy::Immediate,
            SyncPolicy::OnDemand,
            SyncPolicy::Streamed,
        ]
    }
}

impl std::fmt::Display for SyncPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Checksum algorithms accepted for publication metadata and packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecksumType {
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}
