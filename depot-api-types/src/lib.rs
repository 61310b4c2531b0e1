//! Typed data model for the depot content-distribution REST API
//!
//! Every record here mirrors a wire shape owned by the server. The client
//! never synthesizes identifiers; it only echoes back the hrefs the server
//! handed out.

pub mod domain;
pub mod enums;
pub mod ids;
pub mod requests;

// Re-export main types for convenience
pub use domain::{
    ContentSummary, Distribution, Publication, Remote, Repository, RepositoryVersion, Task,
    TaskErrorDetail, TaskHandle,
};
pub use enums::{ChecksumType, SyncPolicy, TaskState};
pub use ids::ResourceHref;
pub use requests::{
    DistributionCreate, PublicationCreate, RemoteCreate, RepositoryCreate, SyncRequest,
};
