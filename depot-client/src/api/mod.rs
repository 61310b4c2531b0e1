//! Typed bindings for the server's REST collections
//!
//! Each binding borrows the shared [`DepotClient`](crate::DepotClient)
//! behind an `Arc` and exposes the handful of calls its collection
//! supports. Calls that queue server-side work return a
//! [`TaskHandle`](depot_api_types::TaskHandle) for the task monitor;
//! everything else completes synchronously.

mod distributions;
mod publications;
mod remotes;
mod repositories;
mod tasks;

pub use distributions::DistributionsApi;
pub use publications::PublicationsApi;
pub use remotes::RemotesApi;
pub use repositories::RepositoriesApi;
pub use tasks::TasksApi;
