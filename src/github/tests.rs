//! Unit tests for the GitHub label lookup module.

use mockall::predicate::{always, eq};
use rstest::rstest;

use super::locator::{DEFAULT_API_BASE, parse_api_base};
use super::{
    LabelIntake, LabelRequest, LabelsError, MockLabelGateway, PersonalAccessToken,
    PullRequestHandle, PullRequestNumber, RepositoryHandle, RepositoryLocator, RepositoryName,
    RepositoryOwner,
};

fn sample_locator() -> RepositoryLocator {
    let api_base = parse_api_base(DEFAULT_API_BASE).expect("default API base should parse");
    RepositoryLocator::from_full_name("octo/repo", api_base)
        .expect("sample locator should parse")
}

fn sample_handle() -> RepositoryHandle {
    RepositoryHandle::new(
        RepositoryOwner::new("octo").expect("owner should be valid"),
        RepositoryName::new("repo").expect("name should be valid"),
    )
}

fn number(value: &str) -> PullRequestNumber {
    PullRequestNumber::parse(value).expect("sample number should parse")
}

#[rstest]
fn parses_repository_slug() {
    let locator = sample_locator();
    assert_eq!(locator.owner().as_str(), "octo", "owner mismatch");
    assert_eq!(locator.repository().as_str(), "repo", "repository mismatch");
    assert_eq!(locator.full_name(), "octo/repo", "full name mismatch");
    assert_eq!(
        locator.api_base().as_str(),
        "https://api.github.com/",
        "api base mismatch"
    );
    assert_eq!(locator.repository_path(), "/repos/octo/repo");
}

#[rstest]
#[case("octo")]
#[case("octo/")]
#[case("/repo")]
#[case("octo/repo/extra")]
#[case("")]
fn rejects_malformed_repository_slug(#[case] slug: &str) {
    let api_base = parse_api_base(DEFAULT_API_BASE).expect("default API base should parse");
    let result = RepositoryLocator::from_full_name(slug, api_base);
    assert_eq!(
        result,
        Err(LabelsError::InvalidRepository {
            value: slug.to_owned()
        }),
        "slug {slug:?}"
    );
}

#[rstest]
fn parses_enterprise_api_base() {
    let api_base =
        parse_api_base("https://ghe.example.com/api/v3").expect("enterprise base should parse");
    assert_eq!(api_base.as_str(), "https://ghe.example.com/api/v3");
}

#[rstest]
fn rejects_relative_api_base() {
    let result = parse_api_base("api.github.com");
    assert!(
        matches!(result, Err(LabelsError::InvalidUrl(_))),
        "expected InvalidUrl, got {result:?}"
    );
}

#[rstest]
#[case("42", 42)]
#[case(" 7\n", 7)]
#[case("007", 7)]
fn parses_pull_request_numbers(#[case] raw: &str, #[case] expected: u64) {
    assert_eq!(number(raw).get(), expected);
}

#[rstest]
#[case("abc")]
#[case("0")]
#[case("-3")]
#[case("")]
#[case("4.5")]
fn rejects_invalid_pull_request_numbers(#[case] raw: &str) {
    assert_eq!(
        PullRequestNumber::parse(raw),
        Err(LabelsError::InvalidPullRequestNumber {
            raw: raw.to_owned()
        })
    );
}

#[rstest]
fn builds_pull_request_and_label_paths() {
    let repository = sample_handle();
    assert_eq!(
        repository.pull_request_path(number("17")),
        "/repos/octo/repo/pulls/17"
    );

    let pull_request = PullRequestHandle::new(repository, number("17"), None);
    assert_eq!(
        pull_request.labels_path(),
        "/repos/octo/repo/issues/17/labels"
    );
}

#[rstest]
fn rejects_empty_token() {
    let result = PersonalAccessToken::new("  ");
    assert!(
        matches!(result, Err(LabelsError::MissingToken)),
        "expected MissingToken, got {result:?}"
    );
}

#[rstest]
fn token_debug_output_is_redacted() {
    let token = PersonalAccessToken::new("ghp_secret").expect("token should be valid");
    let rendered = format!("{token:?}");
    assert!(!rendered.contains("ghp_secret"), "token leaked: {rendered}");
}

#[tokio::test]
async fn resolves_repository_then_pull_request_then_labels() {
    let request = LabelRequest::new(sample_locator(), number("17"));
    let mut gateway = MockLabelGateway::new();
    let mut sequence = mockall::Sequence::new();

    gateway
        .expect_repository()
        .with(always())
        .times(1)
        .in_sequence(&mut sequence)
        .returning(|_| Ok(sample_handle()));

    gateway
        .expect_pull_request()
        .with(eq(sample_handle()), eq(number("17")))
        .times(1)
        .in_sequence(&mut sequence)
        .returning(|repository, pr_number| {
            Ok(PullRequestHandle::new(
                repository.clone(),
                pr_number,
                Some(String::from("demo")),
            ))
        });

    gateway
        .expect_labels()
        .with(always())
        .times(1)
        .in_sequence(&mut sequence)
        .returning(|_| Ok(vec![String::from("bug"), String::from("priority:high")]));

    let intake = LabelIntake::new(&gateway);
    let labels = intake.load(&request).await.expect("intake should succeed");

    assert_eq!(labels, vec!["bug", "priority:high"], "labels mismatch");
}

#[tokio::test]
async fn stops_after_missing_pull_request() {
    let request = LabelRequest::new(sample_locator(), number("99"));
    let mut gateway = MockLabelGateway::new();

    gateway
        .expect_repository()
        .times(1)
        .returning(|_| Ok(sample_handle()));

    gateway
        .expect_pull_request()
        .times(1)
        .returning(|repository, pr_number| {
            Err(LabelsError::PullRequestNotFound {
                repository: repository.full_name(),
                number: pr_number.get(),
            })
        });

    gateway.expect_labels().never();

    let intake = LabelIntake::new(&gateway);
    let result = intake.load(&request).await;

    assert_eq!(
        result,
        Err(LabelsError::PullRequestNotFound {
            repository: String::from("octo/repo"),
            number: 99,
        })
    );
}

#[tokio::test]
async fn stops_after_missing_repository() {
    let request = LabelRequest::new(sample_locator(), number("1"));
    let mut gateway = MockLabelGateway::new();

    gateway.expect_repository().times(1).returning(|locator| {
        Err(LabelsError::RepositoryNotFound {
            repository: locator.full_name(),
        })
    });
    gateway.expect_pull_request().never();
    gateway.expect_labels().never();

    let intake = LabelIntake::new(&gateway);
    let result = intake.load(&request).await;

    assert!(
        matches!(result, Err(LabelsError::RepositoryNotFound { ref repository }) if repository == "octo/repo"),
        "expected RepositoryNotFound, got {result:?}"
    );
}
