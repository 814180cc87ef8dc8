//! GitHub label lookup and token handling.
//!
//! This module wraps Octocrab to resolve a repository, one of its pull
//! requests, and that pull request's labels. Errors are mapped into
//! user-friendly variants so that callers can surface precise failures
//! without exposing Octocrab internals.

pub mod error;
pub mod gateway;
pub mod intake;
pub mod locator;
pub mod models;

pub use error::LabelsError;
pub use gateway::{LabelGateway, OctocrabGateway};
pub use intake::{LabelIntake, LabelRequest};
pub use locator::{
    PersonalAccessToken, PullRequestNumber, RepositoryLocator, RepositoryName, RepositoryOwner,
};
pub use models::{PullRequestHandle, RepositoryHandle};

#[cfg(test)]
pub use gateway::MockLabelGateway;

#[cfg(test)]
mod tests;
