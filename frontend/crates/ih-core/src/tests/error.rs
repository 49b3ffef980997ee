use crate::{CoreError, IssuePriority, IssueSort, IssueStatus, ProjectRole};

use std::str::FromStr;

fn rejected_value(err: &CoreError) -> &str {
    match err {
        CoreError::InvalidIssueStatus { value, .. }
        | CoreError::InvalidIssuePriority { value, .. }
        | CoreError::InvalidProjectRole { value, .. }
        | CoreError::InvalidIssueSort { value, .. } => value,
    }
}

#[test]
fn test_every_error_variant_comes_from_a_parse_failure() {
    let errors = [
        IssueStatus::from_str("archived").unwrap_err(),
        IssuePriority::from_str("urgent").unwrap_err(),
        ProjectRole::from_str("admin").unwrap_err(),
        IssueSort::from_str("votes").unwrap_err(),
    ];

    assert!(matches!(errors[0], CoreError::InvalidIssueStatus { .. }));
    assert!(matches!(errors[1], CoreError::InvalidIssuePriority { .. }));
    assert!(matches!(errors[2], CoreError::InvalidProjectRole { .. }));
    assert!(matches!(errors[3], CoreError::InvalidIssueSort { .. }));

    let values: Vec<&str> = errors.iter().map(rejected_value).collect();
    assert_eq!(values, ["archived", "urgent", "admin", "votes"]);
}
