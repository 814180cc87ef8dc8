//! Identity wrappers and repository addressing for the label lookup.

use std::fmt;

use url::Url;

use super::error::LabelsError;

/// Public GitHub API base used when no override is configured.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    pub(crate) fn new(value: &str) -> Option<Self> {
        if value.is_empty() {
            return None;
        }
        Some(Self(value.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    pub(crate) fn new(value: &str) -> Option<Self> {
        if value.is_empty() {
            return None;
        }
        Some(Self(value.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Pull request number, always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PullRequestNumber(u64);

impl PullRequestNumber {
    /// Parses a base-10 pull request number.
    ///
    /// Surrounding whitespace is ignored. The error echoes the input exactly
    /// as supplied.
    ///
    /// # Errors
    ///
    /// Returns [`LabelsError::InvalidPullRequestNumber`] when the input is not
    /// an integer or is zero.
    pub fn parse(raw: &str) -> Result<Self, LabelsError> {
        raw.trim()
            .parse::<u64>()
            .ok()
            .filter(|value| *value > 0)
            .map(Self)
            .ok_or_else(|| LabelsError::InvalidPullRequestNumber {
                raw: raw.to_owned(),
            })
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PullRequestNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Personal access token wrapper enforcing presence.
///
/// The `Debug` representation never includes the token itself.
#[derive(Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `LabelsError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, LabelsError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(LabelsError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl fmt::Debug for PersonalAccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PersonalAccessToken(<redacted>)")
    }
}

/// Parses and normalises the API base URL.
///
/// # Errors
///
/// Returns [`LabelsError::InvalidUrl`] when the value is not an absolute URL.
pub fn parse_api_base(value: &str) -> Result<Url, LabelsError> {
    let parsed = Url::parse(value).map_err(|error| LabelsError::InvalidUrl(error.to_string()))?;
    if parsed.cannot_be_a_base() {
        return Err(LabelsError::InvalidUrl(format!(
            "{value} cannot be used as a base URL"
        )));
    }
    Ok(parsed)
}

/// Repository addressed by its `owner/name` slug on a given API host.
///
/// # Example
///
/// ```
/// use pr_labels::github::locator::{DEFAULT_API_BASE, RepositoryLocator, parse_api_base};
///
/// let api_base = parse_api_base(DEFAULT_API_BASE).expect("default base should parse");
/// let locator = RepositoryLocator::from_full_name("octo/repo", api_base)
///     .expect("should parse repository slug");
/// assert_eq!(locator.owner().as_str(), "octo");
/// assert_eq!(locator.repository().as_str(), "repo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocator {
    api_base: Url,
    owner: RepositoryOwner,
    repository: RepositoryName,
}

impl RepositoryLocator {
    /// Builds a locator from an `owner/name` slug such as `GITHUB_REPOSITORY`.
    ///
    /// # Errors
    ///
    /// Returns [`LabelsError::InvalidRepository`] unless the slug is exactly two
    /// non-empty segments separated by `/`.
    pub fn from_full_name(full_name: &str, api_base: Url) -> Result<Self, LabelsError> {
        let invalid = || LabelsError::InvalidRepository {
            value: full_name.to_owned(),
        };

        let (owner_segment, repository_segment) = full_name.split_once('/').ok_or_else(invalid)?;
        if repository_segment.contains('/') {
            return Err(invalid());
        }

        let owner = RepositoryOwner::new(owner_segment).ok_or_else(invalid)?;
        let repository = RepositoryName::new(repository_segment).ok_or_else(invalid)?;

        Ok(Self {
            api_base,
            owner,
            repository,
        })
    }

    /// API base URL the repository is served from.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    /// The `owner/name` slug.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner.as_str(), self.repository.as_str())
    }

    pub(crate) fn repository_path(&self) -> String {
        format!(
            "/repos/{}/{}",
            self.owner.as_str(),
            self.repository.as_str()
        )
    }
}
