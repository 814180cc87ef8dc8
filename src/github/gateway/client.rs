//! Octocrab client construction helpers for gateway implementations.

use http::Uri;
use octocrab::Octocrab;

use crate::github::error::LabelsError;
use crate::github::locator::PersonalAccessToken;

use super::error_mapping::map_octocrab_error;

/// Builds an Octocrab client for the given token and API base URL.
///
/// A trailing slash on the base is dropped so request paths join cleanly.
///
/// # Errors
///
/// Returns `LabelsError::InvalidUrl` when the base URI cannot be parsed or
/// `LabelsError::Api` when Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(
    token: &PersonalAccessToken,
    api_base: &str,
) -> Result<Octocrab, LabelsError> {
    let base_uri: Uri = api_base
        .trim_end_matches('/')
        .parse::<Uri>()
        .map_err(|error| LabelsError::InvalidUrl(error.to_string()))?;

    Octocrab::builder()
        .personal_token(token.as_ref())
        .base_uri(base_uri)
        .map_err(|error| LabelsError::Api {
            message: format!("build client failed: {error}"),
        })?
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}
