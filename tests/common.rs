//! Shared helpers for the integration suites
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use depot_client::DepotClient;
use depot_config::DepotConfig;
use std::sync::Arc;
use wiremock::{MockServer, Request, Respond, ResponseTemplate};

/// Initialize tracing once per test binary; RUST_LOG controls verbosity
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Client pointed at a wiremock server, with fast polling so suites stay quick
pub fn test_client(server: &MockServer) -> Arc<DepotClient> {
    let mut config = DepotConfig::default();
    config.api.base_url = format!("{}/api/v3/", server.uri());
    config.tasks.poll_interval = Duration::from_millis(10);
    config.tasks.timeout = Duration::from_secs(5);
    config.tasks.retry_initial_delay = Duration::from_millis(10);
    config.tasks.retry_jitter = false;
    DepotClient::from_config(config).expect("test config must be valid")
}

/// Name that cannot collide across concurrently running tests
pub fn unique_name(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4())
}

/// Serves canned responses in order; the last one repeats for any
/// further requests. Used to script a task's state over successive polls.
pub struct ResponseSequence {
    responses: Vec<ResponseTemplate>,
    position: AtomicUsize,
}

impl ResponseSequence {
    pub fn new(responses: Vec<ResponseTemplate>) -> Self {
        assert!(!responses.is_empty(), "a sequence needs at least one response");
        Self {
            responses,
            position: AtomicUsize::new(0),
        }
    }
}

impl Respond for ResponseSequence {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        let index = self
            .position
            .fetch_add(1, Ordering::SeqCst)
            .min(self.responses.len() - 1);
        self.responses[index].clone()
    }
}
