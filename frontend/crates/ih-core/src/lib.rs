//! Wire data model and shared presentation rules for the IssueHub client.

pub mod error;
pub mod models;
pub mod presentation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::comment::{Comment, NewComment};
pub use models::issue::{Issue, NewIssue};
pub use models::issue_filters::IssueFilters;
pub use models::issue_priority::IssuePriority;
pub use models::issue_sort::IssueSort;
pub use models::issue_status::IssueStatus;
pub use models::issue_update::IssueUpdate;
pub use models::member::{
    AddMember, Member, Membership, UNKNOWN_ASSIGNEE, assignee_name, member_name,
};
pub use models::project::{NewProject, Project};
pub use models::project_role::ProjectRole;
pub use models::user::{LoginRequest, SignupRequest, TokenResponse, User};
pub use presentation::Badge;
