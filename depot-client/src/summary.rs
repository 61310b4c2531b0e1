//! Content-summary helpers
//!
//! Two independently synced repositories are considered equivalent when
//! their latest versions carry equal content summaries. These helpers
//! fetch the maps; comparison is plain equality on the caller's side.

use depot_api_types::Repository;
use std::collections::BTreeMap;

use crate::api::RepositoriesApi;
use crate::error::ClientError;

/// Counts of content units present in the repository's latest version.
///
/// Empty before the first sync.
pub async fn content_summary(
    repositories: &RepositoriesApi,
    repository: &Repository,
) -> Result<BTreeMap<String, u64>, ClientError> {
    match repositories.latest_version(repository).await? {
        Some(version) => Ok(version.content_summary.present),
        None => Ok(BTreeMap::new()),
    }
}

/// Counts of content units the latest version added over its predecessor
pub async fn added_content_summary(
    repositories: &RepositoriesApi,
    repository: &Repository,
) -> Result<BTreeMap<String, u64>, ClientError> {
    match repositories.latest_version(repository).await? {
        Some(version) => Ok(version.content_summary.added),
        None => Ok(BTreeMap::new()),
    }
}
