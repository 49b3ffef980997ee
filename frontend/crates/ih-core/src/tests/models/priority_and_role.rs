use crate::{IssuePriority, ProjectRole};

use std::str::FromStr;

#[test]
fn test_issue_priority_round_trips_through_str() {
    for priority in IssuePriority::ALL {
        assert_eq!(IssuePriority::from_str(priority.as_str()).unwrap(), priority);
    }
}

#[test]
fn test_issue_priority_default_is_medium() {
    assert_eq!(IssuePriority::default(), IssuePriority::Medium);
}

#[test]
fn test_issue_priority_rejects_unknown() {
    assert!(IssuePriority::from_str("urgent").is_err());
}

#[test]
fn test_project_role_from_str() {
    assert_eq!(ProjectRole::from_str("member").unwrap(), ProjectRole::Member);
    assert_eq!(
        ProjectRole::from_str("maintainer").unwrap(),
        ProjectRole::Maintainer
    );
    assert!(ProjectRole::from_str("admin").is_err());
}

#[test]
fn test_project_role_default_is_member() {
    assert_eq!(ProjectRole::default(), ProjectRole::Member);
    assert_eq!(ProjectRole::Maintainer.to_string(), "maintainer");
}
