use crate::screens::{
    CommentBox, Form, Mount, Route, ScreenLifetime, SubmitOutcome, auth_gate, note_read_failure,
};
use crate::{AuthSession, Client};

use chrono::{DateTime, Utc};
use ih_core::presentation::{priority_badge, status_badge};
use ih_core::{
    Badge, Comment, Issue, IssuePriority, IssueStatus, IssueUpdate, Member, assignee_name,
};
use log::{debug, error, info};
use serde::Serialize;

const NO_COMMENTS_MESSAGE: &str = "No comments yet. Be the first to comment!";
const NOT_A_MEMBER: &str = "Assignee must be a project member";
const NOTHING_TO_UPDATE: &str = "Nothing to update";
const TITLE_REQUIRED: &str = "Title is required";

/// One issue with its comments and the controls acting on it
pub struct IssueDetailScreen {
    client: Client,
    lifetime: ScreenLifetime,
    issue_id: i64,
    loading: bool,
    issue: Option<Issue>,
    members: Vec<Member>,
    comments: Vec<Comment>,
    action_error: Option<String>,
    redirect: Option<Route>,
    pub comment: CommentBox,
}

impl IssueDetailScreen {
    pub fn new(client: Client, issue_id: i64) -> Self {
        Self {
            client,
            lifetime: ScreenLifetime::new(),
            issue_id,
            loading: true,
            issue: None,
            members: Vec::new(),
            comments: Vec::new(),
            action_error: None,
            redirect: None,
            comment: CommentBox::default(),
        }
    }

    pub fn lifetime(&self) -> ScreenLifetime {
        self.lifetime.clone()
    }

    pub fn issue_id(&self) -> i64 {
        self.issue_id
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn issue(&self) -> Option<&Issue> {
        self.issue.as_ref()
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Error of the last failed status, assignee, edit or delete action
    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    pub fn redirect(&self) -> Option<Route> {
        self.redirect
    }

    /// Load the issue and its comments concurrently, then the members of the
    /// owning project.
    pub async fn mount(&mut self, auth: &AuthSession) -> Mount {
        let gate = auth_gate(auth);
        if let Mount::Redirect(route) = gate {
            self.redirect = Some(route);
        }
        if gate != Mount::Ready {
            return gate;
        }

        let generation = self.lifetime.current();
        let (issue, comments) = tokio::join!(
            self.client.get_issue(self.issue_id),
            self.client.list_comments(self.issue_id),
        );

        if !self.lifetime.is_current(generation) {
            debug!("Discarding stale load of issue {}", self.issue_id);
            return Mount::Ready;
        }

        match issue {
            Ok(issue) => self.issue = Some(issue),
            Err(e) if e.is_not_found() => info!("Issue {} not found", self.issue_id),
            Err(e) => note_read_failure("issue", &e, &mut self.redirect),
        }
        match comments {
            Ok(comments) => self.comments = comments,
            Err(e) => note_read_failure("comments", &e, &mut self.redirect),
        }
        self.loading = false;

        if let Some(project_id) = self.issue.as_ref().map(|i| i.project_id) {
            self.load_members(project_id).await;
        }

        Mount::Ready
    }

    pub fn unmount(&self) {
        self.lifetime.end();
    }

    pub async fn reload_issue(&mut self) {
        let generation = self.lifetime.current();
        let result = self.client.get_issue(self.issue_id).await;

        if !self.lifetime.is_current(generation) {
            debug!("Discarding stale issue {}", self.issue_id);
            return;
        }

        match result {
            Ok(issue) => self.issue = Some(issue),
            Err(e) => note_read_failure("issue", &e, &mut self.redirect),
        }
        self.loading = false;
    }

    pub async fn load_comments(&mut self) {
        let generation = self.lifetime.current();
        let result = self.client.list_comments(self.issue_id).await;

        if !self.lifetime.is_current(generation) {
            debug!("Discarding stale comments of issue {}", self.issue_id);
            return;
        }

        match result {
            Ok(comments) => self.comments = comments,
            Err(e) => note_read_failure("comments", &e, &mut self.redirect),
        }
    }

    async fn load_members(&mut self, project_id: i64) {
        let generation = self.lifetime.current();
        let result = self.client.list_members(project_id).await;

        if !self.lifetime.is_current(generation) {
            debug!("Discarding stale member list of project {}", project_id);
            return;
        }

        match result {
            Ok(members) => self.members = members,
            Err(e) => note_read_failure("members", &e, &mut self.redirect),
        }
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// One update call, then one re-fetch of the issue.
    pub async fn change_status(&mut self, status: IssueStatus) -> SubmitOutcome {
        self.apply(IssueUpdate::status(status), "Failed to update status")
            .await
    }

    /// Assign to a project member, or unassign with `None`.
    pub async fn change_assignee(&mut self, assignee_id: Option<i64>) -> SubmitOutcome {
        if let Some(id) = assignee_id
            && !self.members.iter().any(|m| m.id == id)
        {
            self.action_error = Some(NOT_A_MEMBER.to_string());
            return SubmitOutcome::Rejected;
        }

        self.apply(IssueUpdate::assignee(assignee_id), "Failed to update assignee")
            .await
    }

    /// Partial edit of title, description or priority.
    pub async fn edit(&mut self, update: IssueUpdate) -> SubmitOutcome {
        if update.is_empty() {
            self.action_error = Some(NOTHING_TO_UPDATE.to_string());
            return SubmitOutcome::Rejected;
        }
        if update.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            self.action_error = Some(TITLE_REQUIRED.to_string());
            return SubmitOutcome::Rejected;
        }

        self.apply(update, "Failed to update issue").await
    }

    async fn apply(&mut self, update: IssueUpdate, fallback: &str) -> SubmitOutcome {
        self.action_error = None;

        match self.client.update_issue(self.issue_id, &update).await {
            Ok(_) => {
                info!("Updated issue {}", self.issue_id);
                self.reload_issue().await;
                SubmitOutcome::Submitted
            }
            Err(e) => {
                error!("{fallback}: {e}");
                self.action_error = Some(e.user_message(fallback));
                SubmitOutcome::Failed
            }
        }
    }

    /// Delete the issue and head back to its project.
    pub async fn delete(&mut self) -> SubmitOutcome {
        self.action_error = None;

        match self.client.delete_issue(self.issue_id).await {
            Ok(()) => {
                info!("Deleted issue {}", self.issue_id);
                self.redirect = Some(match &self.issue {
                    Some(issue) => Route::Project(issue.project_id),
                    None => Route::Projects,
                });
                SubmitOutcome::Submitted
            }
            Err(e) => {
                error!("Failed to delete issue: {e}");
                self.action_error = Some(e.user_message("Failed to delete issue"));
                SubmitOutcome::Failed
            }
        }
    }

    /// Post the comment box. Blank bodies never reach the server.
    pub async fn submit_comment(&mut self) -> SubmitOutcome {
        self.comment.error = None;
        if let Some(message) = self.comment.missing_field() {
            self.comment.error = Some(message.to_string());
            return SubmitOutcome::Rejected;
        }

        let request = self.comment.to_request();
        match self.client.create_comment(self.issue_id, &request).await {
            Ok(comment) => {
                info!("Added comment {} to issue {}", comment.id, self.issue_id);
                self.comment = CommentBox::default();
                self.load_comments().await;
                SubmitOutcome::Submitted
            }
            Err(e) => {
                error!("Failed to add comment: {e}");
                self.comment.error = Some(e.user_message("Failed to add comment"));
                SubmitOutcome::Failed
            }
        }
    }

    // =========================================================================
    // View
    // =========================================================================

    pub fn view(&self) -> IssueDetailView {
        IssueDetailView {
            loading: self.loading,
            not_found: !self.loading && self.issue.is_none(),
            issue: self
                .issue
                .as_ref()
                .map(|issue| IssueSummary::new(issue, &self.members)),
            members: self.members.clone(),
            comment_count: self.comments.len(),
            empty_message: self.comments.is_empty().then_some(NO_COMMENTS_MESSAGE),
            comments: self.comments.clone(),
            comment_error: self.comment.error.clone(),
            action_error: self.action_error.clone(),
            redirect: self.redirect,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IssueSummary {
    pub id: i64,
    pub project_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: IssueStatus,
    pub status_badge: Badge,
    pub priority: IssuePriority,
    pub priority_badge: Badge,
    pub assignee_id: Option<i64>,
    /// Assignee display name; "Assigned" when the assignee is not a listed member
    pub assignee: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub back: Route,
}

impl IssueSummary {
    fn new(issue: &Issue, members: &[Member]) -> Self {
        Self {
            id: issue.id,
            project_id: issue.project_id,
            title: issue.title.clone(),
            description: issue.description.clone(),
            status: issue.status,
            status_badge: status_badge(issue.status),
            priority: issue.priority,
            priority_badge: priority_badge(issue.priority),
            assignee_id: issue.assignee_id,
            assignee: issue
                .assignee_id
                .map(|id| assignee_name(members, id).to_string()),
            created_at: issue.created_at,
            updated_at: issue.updated_at,
            back: Route::Project(issue.project_id),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IssueDetailView {
    pub loading: bool,
    pub not_found: bool,
    pub issue: Option<IssueSummary>,
    pub members: Vec<Member>,
    pub comments: Vec<Comment>,
    pub comment_count: usize,
    pub empty_message: Option<&'static str>,
    pub comment_error: Option<String>,
    pub action_error: Option<String>,
    pub redirect: Option<Route>,
}
