//! Request bodies for create and submit calls
//!
//! Typed builders rather than loose JSON maps, so a scenario cannot submit
//! a field the server does not know about.

use serde::{Deserialize, Serialize};

use crate::enums::{ChecksumType, SyncPolicy};
use crate::ids::ResourceHref;

/// Body of a repository create call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RepositoryCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Body of a remote create call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteCreate {
    pub name: String,
    pub url: String,
    pub policy: SyncPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_validation: Option<bool>,
}

impl RemoteCreate {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            policy: SyncPolicy::default(),
            tls_validation: None,
        }
    }

    pub fn policy(mut self, policy: SyncPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn tls_validation(mut self, validate: bool) -> Self {
        self.tls_validation = Some(validate);
        self
    }
}

/// Body of a repository sync submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncRequest {
    pub remote: ResourceHref,
}

impl SyncRequest {
    pub fn new(remote: ResourceHref) -> Self {
        Self { remote }
    }
}

/// Body of a publication create submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicationCreate {
    pub repository: ResourceHref,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_checksum_type: Option<ChecksumType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_checksum_type: Option<ChecksumType>,
}

impl PublicationCreate {
    pub fn new(repository: ResourceHref) -> Self {
        Self {
            repository,
            metadata_checksum_type: None,
            package_checksum_type: None,
        }
    }

    pub fn metadata_checksum_type(mut self, checksum: ChecksumType) -> Self {
        self.metadata_checksum_type = Some(checksum);
        self
    }

    pub fn package_checksum_type(mut self, checksum: ChecksumType) -> Self {
        self.package_checksum_type = Some(checksum);
        self
    }
}

/// Body of a distribution create submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionCreate {
    pub name: String,
    pub base_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication: Option<ResourceHref>,
}

impl DistributionCreate {
    pub fn new(name: impl Into<String>, base_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_path: base_path.into(),
            publication: None,
        }
    }

    pub fn publication(mut self, publication: ResourceHref) -> Self {
        self.publication = Some(publication);
        self
    }
}
