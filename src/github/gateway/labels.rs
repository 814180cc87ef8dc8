//! Octocrab implementation of the label gateway.

use async_trait::async_trait;
use octocrab::{Octocrab, Page};

use crate::github::error::LabelsError;
use crate::github::locator::{PersonalAccessToken, PullRequestNumber, RepositoryLocator};
use crate::github::models::{
    ApiLabel, ApiPullRequest, ApiRepository, PullRequestHandle, RepositoryHandle,
};

use super::LabelGateway;
use super::client::build_octocrab_client;
use super::error_mapping::{is_not_found, map_octocrab_error};

/// Octocrab-backed gateway.
pub struct OctocrabGateway {
    client: Octocrab,
}

impl OctocrabGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an authenticated client against the locator's API base.
    ///
    /// # Errors
    ///
    /// Returns `LabelsError::InvalidUrl` when the base URI cannot be parsed or
    /// `LabelsError::Api` when Octocrab fails to construct a client.
    pub fn for_token(
        token: &PersonalAccessToken,
        locator: &RepositoryLocator,
    ) -> Result<Self, LabelsError> {
        let octocrab = build_octocrab_client(token, locator.api_base().as_str())?;
        Ok(Self::new(octocrab))
    }
}

#[async_trait]
impl LabelGateway for OctocrabGateway {
    async fn repository(
        &self,
        locator: &RepositoryLocator,
    ) -> Result<RepositoryHandle, LabelsError> {
        let requested = RepositoryHandle::new(locator.owner().clone(), locator.repository().clone());

        match self
            .client
            .get::<ApiRepository, _, _>(locator.repository_path(), None::<&()>)
            .await
        {
            Ok(api) => Ok(api.into_handle(requested)),
            Err(error) if is_not_found(&error) => Err(LabelsError::RepositoryNotFound {
                repository: locator.full_name(),
            }),
            Err(error) => Err(map_octocrab_error("repository", &error)),
        }
    }

    async fn pull_request(
        &self,
        repository: &RepositoryHandle,
        number: PullRequestNumber,
    ) -> Result<PullRequestHandle, LabelsError> {
        match self
            .client
            .get::<ApiPullRequest, _, _>(repository.pull_request_path(number), None::<&()>)
            .await
        {
            Ok(api) => Ok(PullRequestHandle::new(
                repository.clone(),
                number,
                api.title,
            )),
            Err(error) if is_not_found(&error) => Err(LabelsError::PullRequestNotFound {
                repository: repository.full_name(),
                number: number.get(),
            }),
            Err(error) => Err(map_octocrab_error("pull request", &error)),
        }
    }

    async fn labels(&self, pull_request: &PullRequestHandle) -> Result<Vec<String>, LabelsError> {
        let page = self
            .client
            .get::<Page<ApiLabel>, _, _>(pull_request.labels_path(), None::<&()>)
            .await
            .map_err(|error| map_octocrab_error("pull request labels", &error))?;

        self.client
            .all_pages(page)
            .await
            .map(|labels| labels.into_iter().map(String::from).collect())
            .map_err(|error| map_octocrab_error("pull request labels", &error))
    }
}
