//! Task monitor: drive a submitted task to its terminal state
//!
//! The server answers every status read with the task's current state;
//! the monitor owns the polling cadence, the wait budget, and the mapping
//! of terminal states onto typed errors. It holds no mutable state across
//! calls, so one monitor can wait on independent handles concurrently.

use depot_api_types::{ResourceHref, Task, TaskErrorDetail, TaskState};
use depot_http::Backoff;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{debug, error, info, warn};

use crate::api::TasksApi;
use crate::client::DepotClient;
use crate::error::TaskError;

/// Polls one task at a fixed interval until it reaches a terminal state.
///
/// Transient transport failures are retried with exponential backoff
/// inside the same wait budget; server-reported task failures are final
/// and surface as [`TaskError::Failed`].
pub struct TaskMonitor {
    tasks: TasksApi,
    poll_interval: Duration,
    timeout: Duration,
    backoff: Backoff,
}

impl TaskMonitor {
    /// Monitor with the poll interval and timeout the client is configured with
    pub fn new(client: Arc<DepotClient>) -> Self {
        let config = client.tasks_config();
        let poll_interval = config.poll_interval;
        let timeout = config.timeout;
        Self::with_timing(client, poll_interval, timeout)
    }

    /// Monitor with caller-chosen timing; transient-retry backoff still
    /// comes from the client configuration
    pub fn with_timing(client: Arc<DepotClient>, poll_interval: Duration, timeout: Duration) -> Self {
        let config = client.tasks_config();
        let backoff = Backoff::exponential(
            config.retry_initial_delay,
            config.retry_max_delay,
            config.retry_jitter,
        );
        Self {
            tasks: TasksApi::new(client),
            poll_interval,
            timeout,
            backoff,
        }
    }

    /// Wait until the task behind `href` reaches a terminal state.
    ///
    /// Returns the terminal record on completion, with
    /// `created_resources` exactly as the server reported them. Safe to
    /// call again on an already-terminal handle; the server re-serves the
    /// same record for as long as it retains task history, and
    /// [`TaskError::NotFound`] reports the handle once it stops doing so.
    pub async fn await_completion(&self, href: &ResourceHref) -> Result<Task, TaskError> {
        let started = Instant::now();
        let deadline = started + self.timeout;
        let mut polls: u32 = 0;
        let mut transient_attempts: u32 = 0;
        let mut last_state: Option<TaskState> = None;

        debug!(
            "Monitoring task {} (poll every {:?}, timeout {:?})",
            href, self.poll_interval, self.timeout
        );

        loop {
            if Instant::now() >= deadline {
                warn!(
                    "Task {} still not terminal after {:?} and {} polls",
                    href,
                    started.elapsed(),
                    polls
                );
                return Err(TaskError::Timeout {
                    href: href.clone(),
                    elapsed: started.elapsed(),
                    polls,
                });
            }

            match self.tasks.read(href).await {
                Ok(task) => {
                    polls += 1;
                    transient_attempts = 0;

                    if let Some(from) = last_state {
                        if !transition_is_valid(from, task.state) {
                            error!(
                                "Task {} reported impossible transition {} -> {}",
                                href, from, task.state
                            );
                            return Err(TaskError::InvariantViolation {
                                href: href.clone(),
                                from,
                                to: task.state,
                                elapsed: started.elapsed(),
                            });
                        }
                    }
                    last_state = Some(task.state);

                    match task.state {
                        TaskState::Completed => {
                            info!(
                                "Task {} completed after {:?}, created {} resources",
                                href,
                                started.elapsed(),
                                task.created_resources.len()
                            );
                            return Ok(task);
                        }
                        TaskState::Failed | TaskState::Canceled => {
                            let error = task.error.unwrap_or_else(|| {
                                TaskErrorDetail::new(format!(
                                    "task ended in state {} without error detail",
                                    task.state
                                ))
                            });
                            warn!(
                                "Task {} ended in state {} after {:?}: {}",
                                href,
                                task.state,
                                started.elapsed(),
                                error.description
                            );
                            return Err(TaskError::Failed {
                                href: href.clone(),
                                elapsed: started.elapsed(),
                                error,
                            });
                        }
                        TaskState::Waiting | TaskState::Running => {
                            debug!("Task {} is {}, polling again", href, task.state);
                        }
                    }
                }
                Err(crate::error::ClientError::NotFound { .. }) => {
                    warn!(
                        "Task {} no longer resolvable after {:?}",
                        href,
                        started.elapsed()
                    );
                    return Err(TaskError::NotFound {
                        href: href.clone(),
                        elapsed: started.elapsed(),
                    });
                }
                Err(err) if err.is_transient() => {
                    transient_attempts += 1;
                    let delay = self.backoff.delay_for_attempt(transient_attempts);
                    warn!(
                        "Transient error polling task {} (attempt {}): {}; retrying in {:?}",
                        href, transient_attempts, err, delay
                    );
                    let remaining = deadline.saturating_duration_since(Instant::now());
                    if remaining.is_zero() {
                        return Err(TaskError::Timeout {
                            href: href.clone(),
                            elapsed: started.elapsed(),
                            polls,
                        });
                    }
                    sleep(delay.min(remaining)).await;
                    continue;
                }
                Err(err) => {
                    return Err(TaskError::Poll {
                        href: href.clone(),
                        elapsed: started.elapsed(),
                        source: Box::new(err),
                    });
                }
            }

            // Non-terminal: wait out the poll interval, never past the deadline
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(TaskError::Timeout {
                    href: href.clone(),
                    elapsed: started.elapsed(),
                    polls,
                });
            }
            sleep(self.poll_interval.min(remaining)).await;
        }
    }
}

/// A task may only move forward: `Waiting` -> `Running` -> terminal, and
/// never out of a terminal state.
fn transition_is_valid(from: TaskState, to: TaskState) -> bool {
    match from {
        TaskState::Waiting => true,
        TaskState::Running => to != TaskState::Waiting,
        // Terminal records are immutable
        _ => to == from,
    }
}
