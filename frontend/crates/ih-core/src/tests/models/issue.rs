use crate::{Issue, IssuePriority, IssueStatus, NewIssue};

use serde_json::json;

#[test]
fn test_issue_deserializes_server_payload() {
    let issue: Issue = serde_json::from_value(json!({
        "id": 7,
        "project_id": 1,
        "title": "Bug A",
        "description": null,
        "status": "open",
        "priority": "high",
        "reporter_id": 1,
        "assignee_id": 2,
        "created_at": "2024-01-01T12:00:00",
        "updated_at": "2024-01-02T08:30:00.123456"
    }))
    .unwrap();

    assert_eq!(issue.id, 7);
    assert_eq!(issue.status, IssueStatus::Open);
    assert_eq!(issue.priority, IssuePriority::High);
    assert_eq!(issue.assignee_id, Some(2));
    assert!(issue.description.is_none());
    assert_eq!(issue.created_at.to_rfc3339(), "2024-01-01T12:00:00+00:00");
}

#[test]
fn test_issue_rejects_unknown_status() {
    let result: Result<Issue, _> = serde_json::from_value(json!({
        "id": 7,
        "project_id": 1,
        "title": "Bug A",
        "description": null,
        "status": "blocked",
        "priority": "high",
        "reporter_id": 1,
        "assignee_id": null,
        "created_at": "2024-01-01T12:00:00",
        "updated_at": "2024-01-01T12:00:00"
    }));

    assert!(result.is_err());
}

#[test]
fn test_new_issue_omits_absent_fields() {
    let body = NewIssue {
        title: "Bug A".to_string(),
        priority: Some(IssuePriority::High),
        ..Default::default()
    };

    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value, json!({"title": "Bug A", "priority": "high"}));
}
