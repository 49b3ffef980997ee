use crate::ProjectRole;

use serde::{Deserialize, Serialize};

/// A project member as listed by `GET /projects/{id}/members`.
///
/// `id` is the user id, which is what issue assignees reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: ProjectRole,
}

/// Membership record returned when a member is added
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    pub id: i64,
    pub project_id: i64,
    pub user_id: i64,
    pub role: ProjectRole,
}

/// Body of `POST /projects/{id}/members`
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddMember {
    pub email: String,
    pub role: ProjectRole,
}

/// Find the display name of a member by user id.
pub fn member_name(members: &[Member], user_id: i64) -> Option<&str> {
    members
        .iter()
        .find(|m| m.id == user_id)
        .map(|m| m.name.as_str())
}

/// Label for an assignee who is not in the loaded member list
pub const UNKNOWN_ASSIGNEE: &str = "Assigned";

/// Display name of an issue's assignee, falling back to [`UNKNOWN_ASSIGNEE`]
/// when the id matches no member.
pub fn assignee_name(members: &[Member], assignee_id: i64) -> &str {
    member_name(members, assignee_id).unwrap_or(UNKNOWN_ASSIGNEE)
}
