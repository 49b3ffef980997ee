use crate::screens::{
    IssueForm, MemberForm, Modal, ModalView, Mount, Route, ScreenLifetime, SearchDebounce,
    SubmitOutcome, auth_gate, note_read_failure,
};
use crate::{AuthSession, Client};

use ih_core::presentation::{preview, priority_badge, status_badge};
use ih_core::{
    Badge, Issue, IssueFilters, IssuePriority, IssueSort, IssueStatus, Member, Project,
    assignee_name,
};
use log::{debug, error, info};
use serde::Serialize;

const DESCRIPTION_PREVIEW_CHARS: usize = 100;
const NO_ISSUES_MESSAGE: &str = "No issues found. Create your first issue!";

/// One project: header, members, filtered issue list, and the create-issue
/// and add-member modals.
pub struct ProjectDetailScreen {
    client: Client,
    lifetime: ScreenLifetime,
    project_id: i64,
    loading: bool,
    project: Option<Project>,
    members: Vec<Member>,
    issues: Vec<Issue>,
    filters: IssueFilters,
    search_debounce: SearchDebounce,
    redirect: Option<Route>,
    pub create_issue: Modal<IssueForm>,
    pub add_member: Modal<MemberForm>,
}

impl ProjectDetailScreen {
    pub fn new(client: Client, project_id: i64) -> Self {
        Self {
            client,
            lifetime: ScreenLifetime::new(),
            project_id,
            loading: true,
            project: None,
            members: Vec::new(),
            issues: Vec::new(),
            filters: IssueFilters::initial(),
            search_debounce: SearchDebounce::default(),
            redirect: None,
            create_issue: Modal::default(),
            add_member: Modal::default(),
        }
    }

    /// Open the screen with a filter set already selected; the first load uses it.
    pub fn with_filters(mut self, filters: IssueFilters) -> Self {
        self.filters = filters;
        self
    }

    pub fn lifetime(&self) -> ScreenLifetime {
        self.lifetime.clone()
    }

    pub fn project_id(&self) -> i64 {
        self.project_id
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn filters(&self) -> &IssueFilters {
        &self.filters
    }

    pub fn redirect(&self) -> Option<Route> {
        self.redirect
    }

    /// Load project, members and issues concurrently.
    pub async fn mount(&mut self, auth: &AuthSession) -> Mount {
        let gate = auth_gate(auth);
        if let Mount::Redirect(route) = gate {
            self.redirect = Some(route);
        }
        if gate != Mount::Ready {
            return gate;
        }

        let generation = self.lifetime.current();
        let (project, members, issues) = tokio::join!(
            self.client.get_project(self.project_id),
            self.client.list_members(self.project_id),
            self.client.list_issues(self.project_id, &self.filters),
        );

        if !self.lifetime.is_current(generation) {
            debug!("Discarding stale load of project {}", self.project_id);
            return Mount::Ready;
        }

        match project {
            Ok(project) => self.project = Some(project),
            Err(e) if e.is_not_found() => {
                info!("Project {} not found", self.project_id);
            }
            Err(e) => note_read_failure("project", &e, &mut self.redirect),
        }
        match members {
            Ok(members) => self.members = members,
            Err(e) => note_read_failure("members", &e, &mut self.redirect),
        }
        match issues {
            Ok(issues) => self.issues = issues,
            Err(e) => note_read_failure("issues", &e, &mut self.redirect),
        }

        self.loading = false;
        Mount::Ready
    }

    pub fn unmount(&self) {
        self.lifetime.end();
    }

    pub async fn load_issues(&mut self) {
        let generation = self.lifetime.current();
        let result = self.client.list_issues(self.project_id, &self.filters).await;

        if !self.lifetime.is_current(generation) {
            debug!("Discarding stale issue list of project {}", self.project_id);
            return;
        }

        match result {
            Ok(issues) => self.issues = issues,
            Err(e) => note_read_failure("issues", &e, &mut self.redirect),
        }
        self.loading = false;
    }

    pub async fn load_members(&mut self) {
        let generation = self.lifetime.current();
        let result = self.client.list_members(self.project_id).await;

        if !self.lifetime.is_current(generation) {
            debug!("Discarding stale member list of project {}", self.project_id);
            return;
        }

        match result {
            Ok(members) => self.members = members,
            Err(e) => note_read_failure("members", &e, &mut self.redirect),
        }
    }

    // =========================================================================
    // Filters
    // =========================================================================

    /// Replace the whole filter set. Any change re-fetches immediately.
    pub async fn set_filters(&mut self, filters: IssueFilters) {
        if filters == self.filters {
            return;
        }
        self.filters = filters;
        self.load_issues().await;
    }

    pub async fn set_search(&mut self, q: &str) {
        let filters = self.filters.clone().with_search(q);
        self.set_filters(filters).await;
    }

    /// Handle for debouncing typed search text. Call `set_search` only when
    /// `settle()` returns true.
    pub fn search_debounce(&self) -> SearchDebounce {
        self.search_debounce.clone()
    }

    pub async fn set_status_filter(&mut self, status: Option<IssueStatus>) {
        let filters = IssueFilters {
            status,
            ..self.filters.clone()
        };
        self.set_filters(filters).await;
    }

    pub async fn set_priority_filter(&mut self, priority: Option<IssuePriority>) {
        let filters = IssueFilters {
            priority,
            ..self.filters.clone()
        };
        self.set_filters(filters).await;
    }

    pub async fn set_assignee_filter(&mut self, assignee: Option<i64>) {
        let filters = IssueFilters {
            assignee,
            ..self.filters.clone()
        };
        self.set_filters(filters).await;
    }

    pub async fn set_sort(&mut self, sort: IssueSort) {
        let filters = IssueFilters {
            sort: Some(sort),
            ..self.filters.clone()
        };
        self.set_filters(filters).await;
    }

    // =========================================================================
    // Create issue
    // =========================================================================

    /// Pick the assignee of the new issue. Only project members (or nobody)
    /// can be chosen; returns false for anyone else.
    pub fn select_assignee(&mut self, user_id: Option<i64>) -> bool {
        if let Some(id) = user_id
            && !self.members.iter().any(|m| m.id == id)
        {
            return false;
        }
        self.create_issue.form.assignee_id = user_id;
        true
    }

    pub async fn submit_create_issue(&mut self) -> SubmitOutcome {
        if !self.create_issue.begin_submit() {
            return SubmitOutcome::Rejected;
        }

        let request = self.create_issue.form.to_request();
        match self.client.create_issue(self.project_id, &request).await {
            Ok(issue) => {
                info!("Created issue {} in project {}", issue.id, self.project_id);
                self.create_issue.succeed();
                self.load_issues().await;
                SubmitOutcome::Submitted
            }
            Err(e) => {
                error!("Failed to create issue: {e}");
                self.create_issue
                    .fail(e.user_message("Failed to create issue"));
                SubmitOutcome::Failed
            }
        }
    }

    // =========================================================================
    // Add member
    // =========================================================================

    pub async fn submit_add_member(&mut self) -> SubmitOutcome {
        if !self.add_member.begin_submit() {
            return SubmitOutcome::Rejected;
        }

        let request = self.add_member.form.to_request();
        match self.client.add_member(self.project_id, &request).await {
            Ok(membership) => {
                info!(
                    "Added user {} to project {} as {}",
                    membership.user_id, self.project_id, membership.role
                );
                self.add_member.succeed();
                self.load_members().await;
                SubmitOutcome::Submitted
            }
            Err(e) => {
                error!("Failed to add member: {e}");
                self.add_member.fail(e.user_message("Failed to add member"));
                SubmitOutcome::Failed
            }
        }
    }

    // =========================================================================
    // View
    // =========================================================================

    pub fn view(&self) -> ProjectDetailView {
        let issues: Vec<IssueCard> = self
            .issues
            .iter()
            .map(|issue| IssueCard::new(issue, &self.members))
            .collect();

        ProjectDetailView {
            loading: self.loading,
            not_found: !self.loading && self.project.is_none(),
            project: self.project.clone(),
            members: self.members.clone(),
            filters: self.filters.clone(),
            sort_label: self.filters.sort.unwrap_or_default().label(),
            empty_message: (!self.loading && issues.is_empty()).then_some(NO_ISSUES_MESSAGE),
            issues,
            create_issue: self.create_issue.view(),
            add_member: self.add_member.view(),
            redirect: self.redirect,
        }
    }
}

/// An issue as listed on the project page
#[derive(Debug, Clone, Serialize)]
pub struct IssueCard {
    pub id: i64,
    pub title: String,
    pub description_preview: Option<String>,
    pub status: IssueStatus,
    pub status_badge: Badge,
    pub priority: IssuePriority,
    pub priority_badge: Badge,
    /// Assignee display name; "Assigned" when the assignee is not a listed member
    pub assignee: Option<String>,
    pub route: Route,
}

impl IssueCard {
    fn new(issue: &Issue, members: &[Member]) -> Self {
        Self {
            id: issue.id,
            title: issue.title.clone(),
            description_preview: issue
                .description
                .as_deref()
                .filter(|d| !d.is_empty())
                .map(|d| preview(d, DESCRIPTION_PREVIEW_CHARS)),
            status: issue.status,
            status_badge: status_badge(issue.status),
            priority: issue.priority,
            priority_badge: priority_badge(issue.priority),
            assignee: issue
                .assignee_id
                .map(|id| assignee_name(members, id).to_string()),
            route: Route::Issue(issue.id),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetailView {
    pub loading: bool,
    pub not_found: bool,
    pub project: Option<Project>,
    pub members: Vec<Member>,
    pub filters: IssueFilters,
    pub sort_label: &'static str,
    pub issues: Vec<IssueCard>,
    pub empty_message: Option<&'static str>,
    pub create_issue: ModalView,
    pub add_member: ModalView,
    pub redirect: Option<Route>,
}
