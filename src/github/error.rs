//! Error types exposed by the label lookup.

use thiserror::Error;

/// Errors surfaced while reading the action inputs or talking to GitHub.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LabelsError {
    /// A required environment variable was not set.
    #[error("the environment variable {name} is not set")]
    MissingConfiguration {
        /// Name of the missing variable.
        name: String,
    },

    /// The repository slug is not of the form `owner/name`.
    #[error("repository must be given as owner/name, got \"{value}\"")]
    InvalidRepository {
        /// The value that failed validation.
        value: String,
    },

    /// The pull request number is not a positive integer.
    #[error("pull request number must be a positive integer, got \"{raw}\"")]
    InvalidPullRequestNumber {
        /// The value exactly as it was supplied.
        raw: String,
    },

    /// The Git reference does not name a pull request merge ref.
    #[error("the pull request number could not be extracted from GITHUB_REF \"{git_ref}\"")]
    ReferenceExtraction {
        /// The reference that was searched.
        git_ref: String,
    },

    /// The authentication token was blank.
    #[error("a GitHub token is required")]
    MissingToken,

    /// The API base URL could not be parsed.
    #[error("GitHub API URL is invalid: {0}")]
    InvalidUrl(String),

    /// The repository does not exist or the token cannot see it.
    #[error("repository {repository} was not found or is not accessible with this token")]
    RepositoryNotFound {
        /// Full `owner/name` of the repository.
        repository: String,
    },

    /// The repository has no pull request with this number.
    #[error("pull request #{number} was not found in {repository}")]
    PullRequestNotFound {
        /// Full `owner/name` of the repository.
        repository: String,
        /// Requested pull request number.
        number: u64,
    },

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// Rate limit exceeded - the API returned 403/429 with a rate limit message.
    #[error("GitHub API rate limit exceeded: {message}")]
    RateLimitExceeded {
        /// Error message from GitHub.
        message: String,
    },

    /// The merge reference pattern could not be compiled.
    #[error("merge ref pattern failed to compile: {message}")]
    ReferencePattern {
        /// Compiler diagnostic from the regex engine.
        message: String,
    },

    /// GitHub returned any other API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response detail from GitHub describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Writing the step output failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl LabelsError {
    pub(crate) fn missing(name: &str) -> Self {
        Self::MissingConfiguration {
            name: name.to_owned(),
        }
    }
}
