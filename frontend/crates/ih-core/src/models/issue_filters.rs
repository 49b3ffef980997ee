use crate::{IssuePriority, IssueSort, IssueStatus};

use serde::Serialize;

/// Query parameters of `GET /projects/{id}/issues`.
///
/// Filtering and ordering are server-defined; the client sends exactly the
/// selected values and never re-filters the response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IssueFilters {
    /// Free-text search in titles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<IssueStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<IssuePriority>,
    /// Assignee user id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<IssueSort>,
}

impl IssueFilters {
    /// Filters a freshly opened issue list starts with: newest first, nothing else.
    pub fn initial() -> Self {
        Self {
            sort: Some(IssueSort::CreatedAt),
            ..Default::default()
        }
    }

    /// Set the search text; empty text removes the parameter.
    pub fn with_search(mut self, q: &str) -> Self {
        self.q = if q.is_empty() {
            None
        } else {
            Some(q.to_string())
        };
        self
    }
}
