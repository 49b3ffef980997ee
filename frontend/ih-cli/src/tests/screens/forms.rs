use crate::screens::{CommentBox, Form, IssueForm, MemberForm, ProjectForm};

use chrono::NaiveDate;
use ih_core::{IssuePriority, ProjectRole};

#[test]
fn test_project_key_is_upper_cased() {
    let mut form = ProjectForm::default();
    form.set_key("demo");

    assert_eq!(form.key(), "DEMO");
}

#[test]
fn test_project_request_drops_blank_description() {
    let mut form = ProjectForm::default();
    form.name = "Demo".to_string();
    form.description = "   ".to_string();
    form.start_date = NaiveDate::from_ymd_opt(2026, 1, 15);
    form.set_key("dm");

    let request = form.to_request();

    assert_eq!(request.key, "DM");
    assert_eq!(request.description, None);
    assert_eq!(request.start_date, NaiveDate::from_ymd_opt(2026, 1, 15));
}

#[test]
fn test_issue_form_defaults_to_medium_priority() {
    let form = IssueForm {
        title: "Bug A".to_string(),
        ..Default::default()
    };

    let request = form.to_request();

    assert_eq!(form.priority, IssuePriority::Medium);
    assert_eq!(request.priority, Some(IssuePriority::Medium));
    assert_eq!(request.assignee_id, None);
}

#[test]
fn test_issue_form_requires_title() {
    let form = IssueForm {
        title: "  ".to_string(),
        ..Default::default()
    };

    assert_eq!(form.missing_field(), Some("Title is required"));
}

#[test]
fn test_member_form_defaults_to_member_role() {
    let form = MemberForm {
        email: " dev@example.com ".to_string(),
        ..Default::default()
    };

    let request = form.to_request();

    assert_eq!(request.role, ProjectRole::Member);
    assert_eq!(request.email, "dev@example.com");
    assert_eq!(MemberForm::default().missing_field(), Some("Email is required"));
}

#[test]
fn test_comment_box_rejects_whitespace() {
    let comment = CommentBox {
        body: " \n\t ".to_string(),
        ..Default::default()
    };

    assert_eq!(comment.missing_field(), Some("Comment cannot be empty"));
}
