use crate::session::SessionStore;
use crate::{CliClientResult, ClientError};

use std::sync::Arc;

use ih_core::{
    AddMember, Comment, Issue, IssueFilters, IssueUpdate, LoginRequest, Member, Membership,
    NewComment, NewIssue, NewProject, Project, SignupRequest, TokenResponse, User,
};
use log::debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder};
use serde::de::DeserializeOwned;

const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP client for the IssueHub REST API.
///
/// Cloning is cheap: clones share the connection pool and the session store.
#[derive(Clone)]
pub struct Client {
    pub base_url: String,
    session: Arc<dyn SessionStore>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "http://localhost:8000/api")
    /// * `session` - Token source consulted before every request
    pub fn new(base_url: &str, session: Arc<dyn SessionStore>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            client: ReqwestClient::new(),
        }
    }

    /// The session store this client reads its token from
    pub fn session(&self) -> Arc<dyn SessionStore> {
        Arc::clone(&self.session)
    }

    /// Build a request. Every call goes through here, so this is where the
    /// bearer token gets attached.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);

        let mut req = self
            .client
            .request(method, &url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(ACCEPT, JSON_CONTENT_TYPE);

        if let Some(token) = self.session.token() {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Execute request and decode the body, mapping non-success statuses to
    /// `ClientError::Api`. An empty success body decodes as JSON `null`.
    async fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> CliClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(ClientError::from_response(status.as_u16(), &bytes));
        }

        let body: &[u8] = if bytes.is_empty() { b"null" } else { &bytes };
        Ok(serde_json::from_slice(body)?)
    }

    // =========================================================================
    // Auth Operations
    // =========================================================================

    /// Register a new account
    pub async fn signup(&self, profile: &SignupRequest) -> CliClientResult<TokenResponse> {
        let req = self.request(Method::POST, "/auth/signup").json(profile);
        self.execute(req).await
    }

    /// Exchange credentials for a token
    pub async fn login(&self, credentials: &LoginRequest) -> CliClientResult<TokenResponse> {
        let req = self.request(Method::POST, "/auth/login").json(credentials);
        self.execute(req).await
    }

    /// Profile of the user the current token belongs to
    pub async fn me(&self) -> CliClientResult<User> {
        let req = self.request(Method::GET, "/auth/me");
        self.execute(req).await
    }

    // =========================================================================
    // Project Operations
    // =========================================================================

    /// List projects the current user belongs to
    pub async fn list_projects(&self) -> CliClientResult<Vec<Project>> {
        let req = self.request(Method::GET, "/projects");
        self.execute(req).await
    }

    /// Get a project by ID
    pub async fn get_project(&self, id: i64) -> CliClientResult<Project> {
        let req = self.request(Method::GET, &format!("/projects/{}", id));
        self.execute(req).await
    }

    /// Create a new project; the creator becomes its maintainer
    pub async fn create_project(&self, project: &NewProject) -> CliClientResult<Project> {
        let req = self.request(Method::POST, "/projects").json(project);
        self.execute(req).await
    }

    /// List members of a project
    pub async fn list_members(&self, project_id: i64) -> CliClientResult<Vec<Member>> {
        let req = self.request(Method::GET, &format!("/projects/{}/members", project_id));
        self.execute(req).await
    }

    /// Add an existing user to a project by email
    pub async fn add_member(
        &self,
        project_id: i64,
        member: &AddMember,
    ) -> CliClientResult<Membership> {
        let req = self
            .request(Method::POST, &format!("/projects/{}/members", project_id))
            .json(member);
        self.execute(req).await
    }

    // =========================================================================
    // Issue Operations
    // =========================================================================

    /// List issues in a project. Filters are passed through as query parameters.
    pub async fn list_issues(
        &self,
        project_id: i64,
        filters: &IssueFilters,
    ) -> CliClientResult<Vec<Issue>> {
        let req = self
            .request(Method::GET, &format!("/projects/{}/issues", project_id))
            .query(filters);
        self.execute(req).await
    }

    /// Get an issue by ID
    pub async fn get_issue(&self, id: i64) -> CliClientResult<Issue> {
        let req = self.request(Method::GET, &format!("/issues/{}", id));
        self.execute(req).await
    }

    /// Create a new issue in a project
    pub async fn create_issue(&self, project_id: i64, issue: &NewIssue) -> CliClientResult<Issue> {
        let req = self
            .request(Method::POST, &format!("/projects/{}/issues", project_id))
            .json(issue);
        self.execute(req).await
    }

    /// Partially update an issue
    pub async fn update_issue(&self, id: i64, update: &IssueUpdate) -> CliClientResult<Issue> {
        let req = self
            .request(Method::PATCH, &format!("/issues/{}", id))
            .json(update);
        self.execute(req).await
    }

    /// Delete an issue
    pub async fn delete_issue(&self, id: i64) -> CliClientResult<()> {
        let req = self.request(Method::DELETE, &format!("/issues/{}", id));
        self.execute(req).await
    }

    // =========================================================================
    // Comment Operations
    // =========================================================================

    /// List comments on an issue, oldest first
    pub async fn list_comments(&self, issue_id: i64) -> CliClientResult<Vec<Comment>> {
        let req = self.request(Method::GET, &format!("/issues/{}/comments", issue_id));
        self.execute(req).await
    }

    /// Add a comment to an issue
    pub async fn create_comment(
        &self,
        issue_id: i64,
        comment: &NewComment,
    ) -> CliClientResult<Comment> {
        let req = self
            .request(Method::POST, &format!("/issues/{}/comments", issue_id))
            .json(comment);
        self.execute(req).await
    }
}
