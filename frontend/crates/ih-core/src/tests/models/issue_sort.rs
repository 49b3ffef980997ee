use crate::IssueSort;

use std::str::FromStr;

#[test]
fn test_issue_sort_from_str() {
    assert_eq!(IssueSort::from_str("created_at").unwrap(), IssueSort::CreatedAt);
    assert_eq!(IssueSort::from_str("updated_at").unwrap(), IssueSort::UpdatedAt);
    assert_eq!(IssueSort::from_str("priority").unwrap(), IssueSort::Priority);
    assert_eq!(IssueSort::from_str("status").unwrap(), IssueSort::Status);
    assert!(IssueSort::from_str("title").is_err());
}

#[test]
fn test_issue_sort_labels() {
    assert_eq!(IssueSort::CreatedAt.label(), "Newest First");
    assert_eq!(IssueSort::UpdatedAt.label(), "Recently Updated");
}
