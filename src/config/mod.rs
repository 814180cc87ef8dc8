//! Action configuration read from the process environment.
//!
//! All environment access happens here, once, at start-up. The resulting
//! [`ActionConfig`] is immutable and passed explicitly to the rest of the
//! program.
//!
//! # Variables
//!
//! Required (absence is fatal, no defaults are substituted):
//!
//! - `INPUT_GITHUB_TOKEN` – API credential, never logged
//! - `INPUT_PR_NUMBER` – pull request number, used for `pull_request_target`
//! - `GITHUB_REPOSITORY` – `owner/name`
//! - `GITHUB_REF` – Git reference of the run
//! - `GITHUB_EVENT_NAME` – triggering event
//!
//! Optional (empty counts as unset):
//!
//! - `GITHUB_API_URL` – API base, defaults to `https://api.github.com`
//! - `GITHUB_OUTPUT` – file that receives step outputs

use std::env;
use std::fmt;

use camino::Utf8PathBuf;

use crate::github::LabelsError;
use crate::github::locator::DEFAULT_API_BASE;

/// Token input of the action.
pub const GITHUB_TOKEN_VAR: &str = "INPUT_GITHUB_TOKEN";
/// Pull request number input of the action.
pub const PR_NUMBER_VAR: &str = "INPUT_PR_NUMBER";
/// Repository slug of the workflow run.
pub const REPOSITORY_VAR: &str = "GITHUB_REPOSITORY";
/// Git reference of the workflow run.
pub const REF_VAR: &str = "GITHUB_REF";
/// Name of the event that triggered the run.
pub const EVENT_NAME_VAR: &str = "GITHUB_EVENT_NAME";
/// REST API base URL.
pub const API_URL_VAR: &str = "GITHUB_API_URL";
/// Path of the step output file.
pub const OUTPUT_FILE_VAR: &str = "GITHUB_OUTPUT";

/// Immutable snapshot of the action's environment.
#[derive(Clone, PartialEq, Eq)]
pub struct ActionConfig {
    github_token: String,
    pr_number: String,
    repository: String,
    git_ref: String,
    event_name: String,
    api_url: String,
    output_file: Option<Utf8PathBuf>,
}

impl ActionConfig {
    /// Reads the configuration from the process environment.
    ///
    /// Variables holding non-Unicode data are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`LabelsError::MissingConfiguration`] naming the first required
    /// variable that is not set.
    pub fn from_env() -> Result<Self, LabelsError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`LabelsError::MissingConfiguration`] naming the first required
    /// variable for which `lookup` returns `None`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LabelsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &str| lookup(name).ok_or_else(|| LabelsError::missing(name));
        let optional = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let github_token = require(GITHUB_TOKEN_VAR)?;
        let pr_number = require(PR_NUMBER_VAR)?;
        let repository = require(REPOSITORY_VAR)?;
        let git_ref = require(REF_VAR)?;
        let event_name = require(EVENT_NAME_VAR)?;

        let config = Self {
            github_token,
            pr_number,
            repository,
            git_ref,
            event_name,
            api_url: optional(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_BASE.to_owned()),
            output_file: optional(OUTPUT_FILE_VAR).map(Utf8PathBuf::from),
        };

        tracing::debug!(
            repository = %config.repository,
            git_ref = %config.git_ref,
            event_name = %config.event_name,
            pr_number = %config.pr_number,
            api_url = %config.api_url,
            "loaded action configuration"
        );

        Ok(config)
    }

    /// Raw token value.
    #[must_use]
    pub fn github_token(&self) -> &str {
        &self.github_token
    }

    /// Raw pull request number input, possibly empty or non-numeric.
    #[must_use]
    pub fn pr_number(&self) -> &str {
        &self.pr_number
    }

    /// Repository slug, expected as `owner/name`.
    #[must_use]
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// Git reference of the run.
    #[must_use]
    pub fn git_ref(&self) -> &str {
        &self.git_ref
    }

    /// Triggering event name.
    #[must_use]
    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    /// REST API base URL.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Step output file, when the runner provides one.
    #[must_use]
    pub const fn output_file(&self) -> Option<&Utf8PathBuf> {
        self.output_file.as_ref()
    }
}

impl fmt::Debug for ActionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionConfig")
            .field("github_token", &"<redacted>")
            .field("pr_number", &self.pr_number)
            .field("repository", &self.repository)
            .field("git_ref", &self.git_ref)
            .field("event_name", &self.event_name)
            .field("api_url", &self.api_url)
            .field("output_file", &self.output_file)
            .finish()
    }
}
