//! Pull request number resolution from the triggering event.
//!
//! `pull_request_target` runs do not carry a merge ref, so the number must be
//! passed in as an input. Every other event is expected to run on
//! `refs/pull/<N>/merge`.

use std::sync::LazyLock;

use regex::Regex;

use crate::github::{LabelsError, PullRequestNumber};

const PULL_REQUEST_TARGET: &str = "pull_request_target";
const MERGE_REF_PATTERN: &str = r"refs/pull/([0-9]+)/merge";

static MERGE_REF: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(MERGE_REF_PATTERN));

/// The event that triggered the workflow run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerEvent {
    /// `pull_request_target`, whose number comes from the action input.
    PullRequestTarget,
    /// Any other event name; the number is read from the Git reference.
    Other(String),
}

impl TriggerEvent {
    /// Classifies a `GITHUB_EVENT_NAME` value. Matching is exact.
    #[must_use]
    pub fn from_name(event_name: &str) -> Self {
        if event_name == PULL_REQUEST_TARGET {
            Self::PullRequestTarget
        } else {
            Self::Other(event_name.to_owned())
        }
    }

    /// The event name as reported by the runner.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::PullRequestTarget => PULL_REQUEST_TARGET,
            Self::Other(name) => name,
        }
    }
}

/// Resolves the pull request number for `event`.
///
/// # Errors
///
/// Returns [`LabelsError::InvalidPullRequestNumber`] when the input number (or
/// the number found in the reference) is not a positive integer, and
/// [`LabelsError::ReferenceExtraction`] when the reference does not contain
/// `refs/pull/<N>/merge`.
pub fn resolve_pull_request_number(
    event: &TriggerEvent,
    raw_pr_number: &str,
    git_ref: &str,
) -> Result<PullRequestNumber, LabelsError> {
    let number = match event {
        TriggerEvent::PullRequestTarget => PullRequestNumber::parse(raw_pr_number)
            .inspect_err(|_| {
                tracing::error!(
                    pr_number = raw_pr_number,
                    "a valid pull request number input must be defined when triggering on \
                     \"pull_request_target\""
                );
            })?,
        TriggerEvent::Other(_) => extract_from_ref(git_ref)?,
    };

    tracing::info!(
        event = event.name(),
        number = number.get(),
        "resolved pull request number"
    );
    Ok(number)
}

/// Extracts the number from the first `refs/pull/<N>/merge` in `git_ref`.
///
/// # Errors
///
/// See [`resolve_pull_request_number`]. Returns
/// [`LabelsError::ReferencePattern`] if the merge ref pattern is invalid.
pub fn extract_from_ref(git_ref: &str) -> Result<PullRequestNumber, LabelsError> {
    let pattern = MERGE_REF
        .as_ref()
        .map_err(|error| LabelsError::ReferencePattern {
            message: error.to_string(),
        })?;

    let digits = pattern
        .captures(git_ref)
        .and_then(|captures| captures.get(1))
        .ok_or_else(|| LabelsError::ReferenceExtraction {
            git_ref: git_ref.to_owned(),
        })?;

    PullRequestNumber::parse(digits.as_str())
}
