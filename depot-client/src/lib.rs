//! Async client SDK for a depot content-distribution server
//!
//! The server owns repositories, remotes, publications, distributions, and
//! asynchronous tasks. This crate drives those resources through typed
//! bindings and monitors long-running operations (sync, publish,
//! distribute) to completion with [`TaskMonitor`].
//!
//! ```no_run
//! # async fn example() -> Result<(), depot_client::ClientError> {
//! use depot_api_types::{RepositoryCreate, RemoteCreate, SyncRequest};
//! use depot_client::DepotClient;
//! use depot_config::DepotConfig;
//!
//! let client = DepotClient::from_config(DepotConfig::default())?;
//! let repos = client.repositories();
//! let remotes = client.remotes();
//! let monitor = client.task_monitor();
//!
//! let repo = repos.create(&RepositoryCreate::new("fedora-mirror")).await?;
//! let remote = remotes
//!     .create(&RemoteCreate::new("upstream", "http://mirror.example/repo/"))
//!     .await?;
//! let handle = repos.sync(&repo.href, &SyncRequest::new(remote.href)).await?;
//! let task = monitor.await_completion(&handle.task).await?;
//! println!("sync produced {:?}", task.created_resources);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod monitor;
pub mod summary;

// Re-export main types for convenience
pub use client::DepotClient;
pub use error::{ClientError, TaskError};
pub use monitor::TaskMonitor;
pub use summary::{added_content_summary, content_summary};

// The bindings are the public face of the crate
pub use api::{DistributionsApi, PublicationsApi, RemotesApi, RepositoriesApi, TasksApi};
