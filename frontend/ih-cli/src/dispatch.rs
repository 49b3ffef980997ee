//! Command dispatch: each command drives the screen controller the matching
//! page would use and returns its view as JSON.

use crate::comment_commands::CommentCommands;
use crate::commands::Commands;
use crate::issue_commands::IssueCommands;
use crate::project_commands::ProjectCommands;
use crate::screens::{
    IssueDetailScreen, Mount, ProjectDetailScreen, ProjectsScreen, Route, SubmitOutcome,
};
use crate::{AuthSession, CliClientResult, Client, ClientError};

use ih_core::{IssueFilters, IssueUpdate, LoginRequest, SignupRequest};
use log::warn;
use serde::Serialize;
use serde_json::{Value, json};

const NOT_LOGGED_IN: &str = "Not logged in";
const SESSION_EXPIRED: &str = "Session expired, please log in again";
const STILL_LOADING: &str = "Session check has not completed";
const PROJECT_NOT_FOUND: &str = "Project not found";
const ISSUE_NOT_FOUND: &str = "Issue not found";
const NOT_A_MEMBER: &str = "Assignee must be a project member";

/// Run one command against an already restored auth session.
pub async fn dispatch(
    command: Commands,
    client: &Client,
    auth: &mut AuthSession,
) -> CliClientResult<Value> {
    match command {
        Commands::Signup {
            name,
            email,
            password,
        } => {
            let profile = SignupRequest {
                name,
                email,
                password,
            };
            auth.signup(&profile).await?;
            to_json(&auth.user())
        }
        Commands::Login { email, password } => {
            auth.login(&LoginRequest { email, password }).await?;
            to_json(&auth.user())
        }
        Commands::Logout => {
            let route = auth.logout();
            to_json(&route)
        }
        Commands::Whoami => match auth.user() {
            Some(user) => to_json(user),
            None => Err(ClientError::rejected(NOT_LOGGED_IN)),
        },
        Commands::Project { action } => project(action, client, auth).await,
        Commands::Issue { action } => issue(action, client, auth).await,
        Commands::Comment { action } => comment(action, client, auth).await,
    }
}

async fn project(
    action: ProjectCommands,
    client: &Client,
    auth: &mut AuthSession,
) -> CliClientResult<Value> {
    match action {
        ProjectCommands::List => {
            let mut screen = ProjectsScreen::new(client.clone());
            let mount = screen.mount(auth).await;
            settle_mount(mount, screen.redirect(), auth)?;
            to_json(&screen.view())
        }
        ProjectCommands::Create {
            name,
            key,
            description,
            start_date,
        } => {
            let mut screen = ProjectsScreen::new(client.clone());
            let mount = screen.mount(auth).await;
            settle_mount(mount, screen.redirect(), auth)?;

            screen.create.open();
            screen.create.form.name = name;
            screen.create.form.set_key(&key);
            screen.create.form.description = description.unwrap_or_default();
            screen.create.form.start_date = start_date;

            let outcome = screen.submit_create().await;
            settle(outcome, screen.create.error())?;
            to_json(&screen.view())
        }
        ProjectCommands::Show {
            id,
            q,
            status,
            priority,
            assignee,
            sort,
        } => {
            let filters = IssueFilters {
                status,
                priority,
                assignee,
                sort: Some(sort),
                ..IssueFilters::default()
            }
            .with_search(q.as_deref().unwrap_or_default());

            let screen = mount_project(client, auth, id, filters).await?;
            to_json(&screen.view())
        }
        ProjectCommands::AddMember { id, email, role } => {
            let mut screen = mount_project(client, auth, id, IssueFilters::initial()).await?;

            screen.add_member.open();
            screen.add_member.form.email = email;
            screen.add_member.form.role = role;

            let outcome = screen.submit_add_member().await;
            settle(outcome, screen.add_member.error())?;
            to_json(&screen.view())
        }
    }
}

async fn issue(
    action: IssueCommands,
    client: &Client,
    auth: &mut AuthSession,
) -> CliClientResult<Value> {
    match action {
        IssueCommands::Create {
            project_id,
            title,
            description,
            priority,
            assignee_id,
        } => {
            let mut screen =
                mount_project(client, auth, project_id, IssueFilters::initial()).await?;

            if !screen.select_assignee(assignee_id) {
                return Err(ClientError::rejected(NOT_A_MEMBER));
            }
            screen.create_issue.open();
            screen.create_issue.form.title = title;
            screen.create_issue.form.description = description.unwrap_or_default();
            screen.create_issue.form.priority = priority;

            let outcome = screen.submit_create_issue().await;
            settle(outcome, screen.create_issue.error())?;
            to_json(&screen.view())
        }
        IssueCommands::Show { id } => {
            let screen = mount_issue(client, auth, id).await?;
            to_json(&screen.view())
        }
        IssueCommands::Status { id, status } => {
            let mut screen = mount_issue(client, auth, id).await?;
            let outcome = screen.change_status(status).await;
            settle(outcome, screen.action_error())?;
            to_json(&screen.view())
        }
        IssueCommands::Assign {
            id,
            assignee_id,
            unassign,
        } => {
            let mut screen = mount_issue(client, auth, id).await?;
            let assignee = if unassign { None } else { assignee_id };
            let outcome = screen.change_assignee(assignee).await;
            settle(outcome, screen.action_error())?;
            to_json(&screen.view())
        }
        IssueCommands::Edit {
            id,
            title,
            description,
            priority,
        } => {
            let mut screen = mount_issue(client, auth, id).await?;
            let update = IssueUpdate {
                title,
                description,
                priority,
                ..IssueUpdate::default()
            };
            let outcome = screen.edit(update).await;
            settle(outcome, screen.action_error())?;
            to_json(&screen.view())
        }
        IssueCommands::Delete { id } => {
            let mut screen = mount_issue(client, auth, id).await?;
            let outcome = screen.delete().await;
            settle(outcome, screen.action_error())?;

            match screen.redirect() {
                Some(Route::Project(project_id)) => {
                    let project =
                        mount_project(client, auth, project_id, IssueFilters::initial()).await?;
                    to_json(&project.view())
                }
                _ => {
                    let mut projects = ProjectsScreen::new(client.clone());
                    let mount = projects.mount(auth).await;
                    settle_mount(mount, projects.redirect(), auth)?;
                    to_json(&projects.view())
                }
            }
        }
    }
}

async fn comment(
    action: CommentCommands,
    client: &Client,
    auth: &mut AuthSession,
) -> CliClientResult<Value> {
    match action {
        CommentCommands::List { issue_id } => {
            let screen = mount_issue(client, auth, issue_id).await?;
            comments_json(&screen)
        }
        CommentCommands::Add { issue_id, body } => {
            let mut screen = mount_issue(client, auth, issue_id).await?;
            screen.comment.body = body;

            let outcome = screen.submit_comment().await;
            settle(outcome, screen.comment.error())?;
            comments_json(&screen)
        }
    }
}

async fn mount_project(
    client: &Client,
    auth: &mut AuthSession,
    id: i64,
    filters: IssueFilters,
) -> CliClientResult<ProjectDetailScreen> {
    let mut screen = ProjectDetailScreen::new(client.clone(), id).with_filters(filters);
    let mount = screen.mount(auth).await;
    settle_mount(mount, screen.redirect(), auth)?;

    if screen.project().is_none() {
        return Err(ClientError::rejected(PROJECT_NOT_FOUND));
    }
    Ok(screen)
}

async fn mount_issue(
    client: &Client,
    auth: &mut AuthSession,
    id: i64,
) -> CliClientResult<IssueDetailScreen> {
    let mut screen = IssueDetailScreen::new(client.clone(), id);
    let mount = screen.mount(auth).await;
    settle_mount(mount, screen.redirect(), auth)?;

    if screen.issue().is_none() {
        return Err(ClientError::rejected(ISSUE_NOT_FOUND));
    }
    Ok(screen)
}

/// Turn a mount result into an error when the screen could not be shown.
/// A screen that saw its token rejected also ends the stored session.
fn settle_mount(
    mount: Mount,
    redirect: Option<Route>,
    auth: &mut AuthSession,
) -> CliClientResult<()> {
    match mount {
        Mount::Deferred => Err(ClientError::rejected(STILL_LOADING)),
        Mount::Redirect(_) => Err(ClientError::rejected(NOT_LOGGED_IN)),
        Mount::Ready if redirect == Some(Route::Login) => {
            warn!("Server rejected the session token");
            auth.logout();
            Err(ClientError::rejected(SESSION_EXPIRED))
        }
        Mount::Ready => Ok(()),
    }
}

fn settle(outcome: SubmitOutcome, error: Option<&str>) -> CliClientResult<()> {
    match outcome {
        SubmitOutcome::Submitted => Ok(()),
        SubmitOutcome::Rejected | SubmitOutcome::Failed => Err(ClientError::rejected(
            error.unwrap_or("Request failed"),
        )),
    }
}

fn comments_json(screen: &IssueDetailScreen) -> CliClientResult<Value> {
    let view = screen.view();
    Ok(json!({
        "issue_id": screen.issue_id(),
        "comment_count": view.comment_count,
        "comments": view.comments,
    }))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> CliClientResult<Value> {
    Ok(serde_json::to_value(value)?)
}
