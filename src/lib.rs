//! Pull request label lookup for CI workflows.
//!
//! The library reads the action's environment, works out which pull request
//! triggered the run, asks GitHub for that pull request's labels through
//! Octocrab, and publishes them as the `prLabels` step output.

pub mod action;
pub mod cli;
pub mod config;
pub mod github;
pub mod output;
pub mod resolver;
pub mod telemetry;

pub use action::{label_request, run, run_with_gateway};
pub use cli::Cli;
pub use config::ActionConfig;
pub use github::{
    LabelGateway, LabelIntake, LabelRequest, LabelsError, OctocrabGateway, PersonalAccessToken,
    PullRequestNumber, RepositoryLocator,
};
pub use output::{OutputChannel, OutputMode, PR_LABELS_OUTPUT, render_label_list};
pub use resolver::{TriggerEvent, resolve_pull_request_number};
