//! The end-to-end label lookup performed by one action run.

use crate::config::ActionConfig;
use crate::github::locator::parse_api_base;
use crate::github::{
    LabelGateway, LabelIntake, LabelRequest, LabelsError, OctocrabGateway, PersonalAccessToken,
    RepositoryLocator,
};
use crate::output::{OutputChannel, OutputMode, PR_LABELS_OUTPUT, render_label_list};
use crate::resolver::{TriggerEvent, resolve_pull_request_number};

/// Validates `config` into the pull request to inspect.
///
/// Performs no network access.
///
/// # Errors
///
/// Returns the resolver's errors, [`LabelsError::InvalidRepository`] for a
/// malformed slug, or [`LabelsError::InvalidUrl`] for a bad API base.
pub fn label_request(config: &ActionConfig) -> Result<LabelRequest, LabelsError> {
    let api_base = parse_api_base(config.api_url())?;
    let repository = RepositoryLocator::from_full_name(config.repository(), api_base)?;

    let event = TriggerEvent::from_name(config.event_name());
    let number = resolve_pull_request_number(&event, config.pr_number(), config.git_ref())?;

    Ok(LabelRequest::new(repository, number))
}

/// Runs the action: resolve the pull request, fetch its labels, publish them.
///
/// Returns the label names that were published.
///
/// # Errors
///
/// Returns the first failure from validation, the GitHub lookups, or writing
/// the output.
pub async fn run(config: &ActionConfig, mode: OutputMode) -> Result<Vec<String>, LabelsError> {
    let token = PersonalAccessToken::new(config.github_token())?;
    let request = label_request(config)?;
    let channel = OutputChannel::select(mode, config.output_file())?;

    let gateway = OctocrabGateway::for_token(&token, request.repository())?;
    run_with_gateway(&gateway, &request, &channel).await
}

/// Fetches and publishes labels through an already constructed gateway.
///
/// # Errors
///
/// See [`run`].
pub async fn run_with_gateway<Gateway>(
    gateway: &Gateway,
    request: &LabelRequest,
    channel: &OutputChannel,
) -> Result<Vec<String>, LabelsError>
where
    Gateway: LabelGateway,
{
    let labels = LabelIntake::new(gateway).load(request).await?;
    channel.publish(PR_LABELS_OUTPUT, &render_label_list(&labels))?;
    Ok(labels)
}
