//! Handles returned by the gateway and the API payloads behind them.

use serde::Deserialize;

use super::locator::{PullRequestNumber, RepositoryName, RepositoryOwner};

/// Remote reference to a repository, as resolved by GitHub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryHandle {
    owner: RepositoryOwner,
    name: RepositoryName,
}

impl RepositoryHandle {
    /// Creates a handle from its owner and name.
    #[must_use]
    pub const fn new(owner: RepositoryOwner, name: RepositoryName) -> Self {
        Self { owner, name }
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn name(&self) -> &RepositoryName {
        &self.name
    }

    /// The `owner/name` slug.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner.as_str(), self.name.as_str())
    }

    pub(crate) fn pull_request_path(&self, number: PullRequestNumber) -> String {
        format!(
            "/repos/{}/{}/pulls/{}",
            self.owner.as_str(),
            self.name.as_str(),
            number.get()
        )
    }
}

/// Remote reference to one pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestHandle {
    repository: RepositoryHandle,
    number: PullRequestNumber,
    title: Option<String>,
}

impl PullRequestHandle {
    /// Creates a handle for `number` within `repository`.
    #[must_use]
    pub const fn new(
        repository: RepositoryHandle,
        number: PullRequestNumber,
        title: Option<String>,
    ) -> Self {
        Self {
            repository,
            number,
            title,
        }
    }

    /// Repository the pull request belongs to.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryHandle {
        &self.repository
    }

    /// Pull request number.
    #[must_use]
    pub const fn number(&self) -> PullRequestNumber {
        self.number
    }

    /// Title, when GitHub reported one.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    // Labels live on the issue that backs every pull request.
    pub(crate) fn labels_path(&self) -> String {
        format!(
            "/repos/{}/{}/issues/{}/labels",
            self.repository.owner.as_str(),
            self.repository.name.as_str(),
            self.number.get()
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiRepository {
    pub(super) name: String,
    pub(super) owner: ApiUser,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiUser {
    pub(super) login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiPullRequest {
    pub(super) title: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiLabel {
    pub(super) name: String,
}

impl ApiRepository {
    /// Converts the payload into a handle, keeping `fallback` when GitHub
    /// returns an empty owner or name.
    pub(super) fn into_handle(self, fallback: RepositoryHandle) -> RepositoryHandle {
        match (
            RepositoryOwner::new(&self.owner.login),
            RepositoryName::new(&self.name),
        ) {
            (Some(owner), Some(name)) => RepositoryHandle::new(owner, name),
            _ => fallback,
        }
    }
}

impl From<ApiLabel> for String {
    fn from(value: ApiLabel) -> Self {
        value.name
    }
}
