use crate::{IssueStatus, IssueUpdate};

use serde_json::json;

#[test]
fn test_status_update_sends_only_status() {
    let value = serde_json::to_value(IssueUpdate::status(IssueStatus::Resolved)).unwrap();
    assert_eq!(value, json!({"status": "resolved"}));
}

#[test]
fn test_unassign_sends_explicit_null() {
    let value = serde_json::to_value(IssueUpdate::assignee(None)).unwrap();
    assert_eq!(value, json!({"assignee_id": null}));
}

#[test]
fn test_assign_sends_member_id() {
    let value = serde_json::to_value(IssueUpdate::assignee(Some(2))).unwrap();
    assert_eq!(value, json!({"assignee_id": 2}));
}

#[test]
fn test_default_update_is_empty() {
    assert!(IssueUpdate::default().is_empty());
    assert!(!IssueUpdate::status(IssueStatus::Open).is_empty());
    assert_eq!(serde_json::to_value(IssueUpdate::default()).unwrap(), json!({}));
}
