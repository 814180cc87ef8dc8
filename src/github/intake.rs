//! High-level label lookup used by the action.

use super::error::LabelsError;
use super::gateway::LabelGateway;
use super::locator::{PullRequestNumber, RepositoryLocator};

/// The pull request whose labels should be listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRequest {
    repository: RepositoryLocator,
    number: PullRequestNumber,
}

impl LabelRequest {
    /// Creates a request for pull request `number` in `repository`.
    #[must_use]
    pub const fn new(repository: RepositoryLocator, number: PullRequestNumber) -> Self {
        Self { repository, number }
    }

    /// Target repository.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryLocator {
        &self.repository
    }

    /// Target pull request number.
    #[must_use]
    pub const fn number(&self) -> PullRequestNumber {
        self.number
    }
}

/// Resolves repository, pull request and labels, in that order.
pub struct LabelIntake<'client, Gateway>
where
    Gateway: LabelGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> LabelIntake<'client, Gateway>
where
    Gateway: LabelGateway,
{
    /// Create a new intake facade using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Load the label names of the requested pull request.
    ///
    /// Each lookup needs the handle produced by the previous one, so the calls
    /// run strictly one after another.
    ///
    /// # Errors
    ///
    /// Propagates the first failure from the gateway: a missing repository or
    /// pull request, rejected credentials, or a network problem.
    pub async fn load(&self, request: &LabelRequest) -> Result<Vec<String>, LabelsError> {
        let repository = self.client.repository(request.repository()).await?;
        tracing::debug!(repository = %repository.full_name(), "resolved repository");

        let pull_request = self
            .client
            .pull_request(&repository, request.number())
            .await?;
        tracing::debug!(
            number = pull_request.number().get(),
            title = pull_request.title().unwrap_or_default(),
            "resolved pull request"
        );

        let labels = self.client.labels(&pull_request).await?;
        tracing::info!(count = labels.len(), "fetched pull request labels");
        Ok(labels)
    }
}
