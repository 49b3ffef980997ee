use crate::{IssueFilters, IssueSort, IssueStatus};

use serde_json::json;

#[test]
fn test_initial_filters_sort_newest_first() {
    let filters = IssueFilters::initial();
    assert_eq!(filters.sort, Some(IssueSort::CreatedAt));
    assert_eq!(serde_json::to_value(&filters).unwrap(), json!({"sort": "created_at"}));
}

#[test]
fn test_empty_search_is_omitted() {
    let filters = IssueFilters::initial().with_search("");
    assert!(filters.q.is_none());

    let filters = IssueFilters::initial().with_search("login");
    assert_eq!(filters.q.as_deref(), Some("login"));
}

#[test]
fn test_selected_filters_serialize_as_given() {
    let filters = IssueFilters {
        status: Some(IssueStatus::Open),
        assignee: Some(2),
        ..IssueFilters::initial()
    };

    assert_eq!(
        serde_json::to_value(&filters).unwrap(),
        json!({"status": "open", "assignee": 2, "sort": "created_at"})
    );
}
