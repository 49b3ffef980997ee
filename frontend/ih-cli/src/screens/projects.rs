use crate::screens::{
    Modal, ModalView, Mount, ProjectForm, Route, ScreenLifetime, SubmitOutcome, auth_gate,
    note_read_failure,
};
use crate::{AuthSession, Client};

use ih_core::Project;
use log::{debug, info};
use serde::Serialize;

const EMPTY_MESSAGE: &str = "No projects yet. Create your first project to get started!";

/// Projects list with a create-project modal
pub struct ProjectsScreen {
    client: Client,
    lifetime: ScreenLifetime,
    loading: bool,
    projects: Vec<Project>,
    redirect: Option<Route>,
    pub create: Modal<ProjectForm>,
}

impl ProjectsScreen {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            lifetime: ScreenLifetime::new(),
            loading: true,
            projects: Vec::new(),
            redirect: None,
            create: Modal::default(),
        }
    }

    pub fn lifetime(&self) -> ScreenLifetime {
        self.lifetime.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn redirect(&self) -> Option<Route> {
        self.redirect
    }

    pub async fn mount(&mut self, auth: &AuthSession) -> Mount {
        let gate = auth_gate(auth);
        if let Mount::Redirect(route) = gate {
            self.redirect = Some(route);
        }
        if gate != Mount::Ready {
            return gate;
        }

        self.load_projects().await;
        Mount::Ready
    }

    pub fn unmount(&self) {
        self.lifetime.end();
    }

    pub async fn load_projects(&mut self) {
        let generation = self.lifetime.current();
        let result = self.client.list_projects().await;

        if !self.lifetime.is_current(generation) {
            debug!("Discarding stale project list");
            return;
        }

        match result {
            Ok(projects) => self.projects = projects,
            Err(e) => note_read_failure("projects", &e, &mut self.redirect),
        }
        self.loading = false;
    }

    /// Create the project in the form, then re-fetch the list.
    pub async fn submit_create(&mut self) -> SubmitOutcome {
        if !self.create.begin_submit() {
            return SubmitOutcome::Rejected;
        }

        let request = self.create.form.to_request();
        match self.client.create_project(&request).await {
            Ok(project) => {
                info!("Created project {} ({})", project.name, project.key);
                self.create.succeed();
                self.load_projects().await;
                SubmitOutcome::Submitted
            }
            Err(e) => {
                self.create.fail(e.user_message("Failed to create project"));
                SubmitOutcome::Failed
            }
        }
    }

    pub fn view(&self) -> ProjectsView {
        let projects: Vec<ProjectCard> = self
            .projects
            .iter()
            .map(|p| ProjectCard {
                id: p.id,
                name: p.name.clone(),
                key: p.key.clone(),
                description: p.description.clone().filter(|d| !d.is_empty()),
                route: Route::Project(p.id),
            })
            .collect();

        ProjectsView {
            loading: self.loading,
            empty_message: (!self.loading && projects.is_empty()).then_some(EMPTY_MESSAGE),
            projects,
            create: self.create.view(),
            redirect: self.redirect,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectCard {
    pub id: i64,
    pub name: String,
    pub key: String,
    pub description: Option<String>,
    pub route: Route,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectsView {
    pub loading: bool,
    pub projects: Vec<ProjectCard>,
    pub empty_message: Option<&'static str>,
    pub create: ModalView,
    pub redirect: Option<Route>,
}
