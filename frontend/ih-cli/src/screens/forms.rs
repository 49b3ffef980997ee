use crate::screens::Form;

use chrono::NaiveDate;
use ih_core::{AddMember, IssuePriority, NewComment, NewIssue, NewProject, ProjectRole};

/// Empty or whitespace-only optional text is not sent
fn optional_text(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Create-project form
#[derive(Debug, Clone, Default)]
pub struct ProjectForm {
    pub name: String,
    key: String,
    pub description: String,
    pub start_date: Option<NaiveDate>,
}

impl ProjectForm {
    /// Keys are always upper case
    pub fn set_key(&mut self, key: &str) {
        self.key = key.to_uppercase();
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn to_request(&self) -> NewProject {
        NewProject {
            name: self.name.clone(),
            key: self.key.clone(),
            description: optional_text(&self.description),
            start_date: self.start_date,
        }
    }
}

impl Form for ProjectForm {
    fn missing_field(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            Some("Project name is required")
        } else if self.key.trim().is_empty() {
            Some("Project key is required")
        } else {
            None
        }
    }
}

/// Create-issue form. The assignee is chosen through the owning screen,
/// which only accepts project members.
#[derive(Debug, Clone, Default)]
pub struct IssueForm {
    pub title: String,
    pub description: String,
    pub priority: IssuePriority,
    pub(crate) assignee_id: Option<i64>,
}

impl IssueForm {
    pub fn assignee_id(&self) -> Option<i64> {
        self.assignee_id
    }

    pub fn to_request(&self) -> NewIssue {
        NewIssue {
            title: self.title.clone(),
            description: optional_text(&self.description),
            priority: Some(self.priority),
            assignee_id: self.assignee_id,
        }
    }
}

impl Form for IssueForm {
    fn missing_field(&self) -> Option<&'static str> {
        if self.title.trim().is_empty() {
            Some("Title is required")
        } else {
            None
        }
    }
}

/// Add-member form
#[derive(Debug, Clone, Default)]
pub struct MemberForm {
    pub email: String,
    pub role: ProjectRole,
}

impl MemberForm {
    pub fn to_request(&self) -> AddMember {
        AddMember {
            email: self.email.trim().to_string(),
            role: self.role,
        }
    }
}

impl Form for MemberForm {
    fn missing_field(&self) -> Option<&'static str> {
        if self.email.trim().is_empty() {
            Some("Email is required")
        } else {
            None
        }
    }
}

/// Inline comment composer on the issue screen
#[derive(Debug, Clone, Default)]
pub struct CommentBox {
    pub body: String,
    pub(crate) error: Option<String>,
}

impl CommentBox {
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn to_request(&self) -> NewComment {
        NewComment {
            body: self.body.clone(),
        }
    }
}

impl Form for CommentBox {
    fn missing_field(&self) -> Option<&'static str> {
        if self.body.trim().is_empty() {
            Some("Comment cannot be empty")
        } else {
            None
        }
    }
}
