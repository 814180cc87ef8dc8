//! Gateways for looking up pull request labels through Octocrab.
//!
//! The trait keeps the three sequential lookups mockable in tests while the
//! Octocrab implementation issues the real HTTP requests.

mod client;
mod error_mapping;
mod labels;

pub use labels::OctocrabGateway;

use async_trait::async_trait;

use crate::github::error::LabelsError;
use crate::github::locator::{PullRequestNumber, RepositoryLocator};
use crate::github::models::{PullRequestHandle, RepositoryHandle};

/// Capability needed to enumerate the labels of a pull request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LabelGateway: Send + Sync {
    /// Resolve the repository, proving the token can see it.
    async fn repository(
        &self,
        locator: &RepositoryLocator,
    ) -> Result<RepositoryHandle, LabelsError>;

    /// Resolve a pull request within a resolved repository.
    async fn pull_request(
        &self,
        repository: &RepositoryHandle,
        number: PullRequestNumber,
    ) -> Result<PullRequestHandle, LabelsError>;

    /// List the label names attached to the pull request, in API order.
    async fn labels(&self, pull_request: &PullRequestHandle) -> Result<Vec<String>, LabelsError>;
}
