use crate::{IssuePriority, IssueStatus};

use serde::Serialize;

/// Partial body of `PATCH /issues/{id}`. Unset fields are omitted.
///
/// `assignee_id` is tri-state: `None` leaves the assignee alone,
/// `Some(None)` clears it (sent as `null`), `Some(Some(id))` assigns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IssueUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<IssueStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<IssuePriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<Option<i64>>,
}

impl IssueUpdate {
    pub fn status(status: IssueStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn assignee(assignee_id: Option<i64>) -> Self {
        Self {
            assignee_id: Some(assignee_id),
            ..Default::default()
        }
    }

    /// True when no field would be sent
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
