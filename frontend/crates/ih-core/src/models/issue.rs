use crate::models::timestamp;
use crate::{IssuePriority, IssueStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: i64,
    /// Owning project; never changes after creation
    pub project_id: i64,

    pub title: String,
    pub description: Option<String>,

    // Workflow
    pub status: IssueStatus,
    pub priority: IssuePriority,

    pub reporter_id: i64,
    pub assignee_id: Option<i64>,

    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /projects/{id}/issues`
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewIssue {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<IssuePriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<i64>,
}
