//! Shared helpers for seeding a mock GitHub API.

use std::collections::HashMap;

use pr_labels::ActionConfig;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Serves `GET /repos/{full_name}` for an existing repository.
pub async fn mount_repository(server: &MockServer, full_name: &str) {
    let (owner, name) = full_name.split_once('/').unwrap_or((full_name, ""));
    let body = json!({
        "id": 1,
        "name": name,
        "full_name": full_name,
        "owner": { "login": owner }
    });

    Mock::given(method("GET"))
        .and(path(format!("/repos/{full_name}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Serves `GET /repos/{full_name}/pulls/{number}` for an existing pull request.
pub async fn mount_pull_request(server: &MockServer, full_name: &str, number: u64) {
    let body = json!({
        "number": number,
        "title": format!("Pull request {number}"),
        "state": "open"
    });

    Mock::given(method("GET"))
        .and(path(format!("/repos/{full_name}/pulls/{number}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Serves a single page of labels for the pull request.
pub async fn mount_labels(server: &MockServer, full_name: &str, number: u64, labels: &[&str]) {
    let body: Vec<_> = labels
        .iter()
        .enumerate()
        .map(|(index, name)| json!({ "id": index + 1, "name": name, "color": "ededed" }))
        .collect();

    Mock::given(method("GET"))
        .and(path(format!("/repos/{full_name}/issues/{number}/labels")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Answers `GET {request_path}` with a GitHub-style error body.
pub async fn mount_error(server: &MockServer, request_path: &str, status: u16, message: &str) {
    Mock::given(method("GET"))
        .and(path(request_path.to_owned()))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({
            "message": message,
            "documentation_url": "https://docs.github.com/rest"
        })))
        .mount(server)
        .await;
}

/// Builds an action configuration pointed at `api_url`.
///
/// Defaults describe a `pull_request` run on `octo/repo`; `overrides` replace
/// or add variables, and `None` removes one.
pub fn action_config(
    api_url: &str,
    overrides: &[(&str, Option<&str>)],
) -> Result<ActionConfig, pr_labels::LabelsError> {
    let mut vars: HashMap<String, String> = HashMap::from([
        ("INPUT_GITHUB_TOKEN".to_owned(), "ghp_test".to_owned()),
        ("INPUT_PR_NUMBER".to_owned(), String::new()),
        ("GITHUB_REPOSITORY".to_owned(), "octo/repo".to_owned()),
        ("GITHUB_REF".to_owned(), "refs/pull/17/merge".to_owned()),
        ("GITHUB_EVENT_NAME".to_owned(), "pull_request".to_owned()),
        ("GITHUB_API_URL".to_owned(), api_url.to_owned()),
    ]);

    for (name, value) in overrides {
        match value {
            Some(set) => vars.insert((*name).to_owned(), (*set).to_owned()),
            None => vars.remove(*name),
        };
    }

    ActionConfig::from_lookup(|name| vars.get(name).cloned())
}
