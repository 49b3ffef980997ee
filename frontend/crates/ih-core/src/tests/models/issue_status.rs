use crate::IssueStatus;

use std::str::FromStr;

#[test]
fn test_issue_status_as_str() {
    assert_eq!(IssueStatus::Open.as_str(), "open");
    assert_eq!(IssueStatus::InProgress.as_str(), "in_progress");
    assert_eq!(IssueStatus::Resolved.as_str(), "resolved");
    assert_eq!(IssueStatus::Closed.as_str(), "closed");
}

#[test]
fn test_issue_status_from_str() {
    assert_eq!(
        IssueStatus::from_str("in_progress").unwrap(),
        IssueStatus::InProgress
    );
    assert_eq!(IssueStatus::from_str("closed").unwrap(), IssueStatus::Closed);
    assert!(IssueStatus::from_str("In Progress").is_err());
    assert!(IssueStatus::from_str("done").is_err());
}

#[test]
fn test_issue_status_default_is_open() {
    assert_eq!(IssueStatus::default(), IssueStatus::Open);
}

#[test]
fn test_issue_status_serde_uses_snake_case() {
    let json = serde_json::to_string(&IssueStatus::InProgress).unwrap();
    assert_eq!(json, "\"in_progress\"");

    let parsed: IssueStatus = serde_json::from_str("\"resolved\"").unwrap();
    assert_eq!(parsed, IssueStatus::Resolved);
}

#[test]
fn test_invalid_status_error_names_value() {
    let err = IssueStatus::from_str("wontfix").unwrap_err();
    assert!(err.to_string().contains("wontfix"));
}
