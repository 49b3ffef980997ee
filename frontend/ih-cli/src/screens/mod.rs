//! Screen controllers.
//!
//! A screen holds the local state of one page (loading flag, fetched
//! entities, form fields, modal state), loads through the API client on
//! mount, re-fetches after every mutation and renders a serializable view.

pub(crate) mod debounce;
pub(crate) mod forms;
pub(crate) mod issue_detail;
pub(crate) mod lifetime;
pub(crate) mod modal;
pub(crate) mod project_detail;
pub(crate) mod projects;
pub(crate) mod route;

pub use debounce::{SEARCH_QUIET_PERIOD, SearchDebounce};
pub use forms::{CommentBox, IssueForm, MemberForm, ProjectForm};
pub use issue_detail::{IssueDetailScreen, IssueDetailView, IssueSummary};
pub use lifetime::{Generation, ScreenLifetime};
pub use modal::{Form, Modal, ModalState, ModalView, SubmitOutcome};
pub use project_detail::{IssueCard, ProjectDetailScreen, ProjectDetailView};
pub use projects::{ProjectCard, ProjectsScreen, ProjectsView};
pub use route::Route;

use crate::{AuthSession, ClientError};

use log::error;
use serde::Serialize;

/// Result of mounting a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mount", content = "route", rename_all = "snake_case")]
pub enum Mount {
    /// Data loaded
    Ready,
    /// Auth check still running; mount again once it resolves
    Deferred,
    /// Screen not available, go here instead
    Redirect(Route),
}

/// Redirect-if-unauthenticated, deferred while the auth check is pending.
pub(crate) fn auth_gate(auth: &AuthSession) -> Mount {
    if auth.is_loading() {
        Mount::Deferred
    } else if auth.is_authenticated() {
        Mount::Ready
    } else {
        Mount::Redirect(Route::Login)
    }
}

/// Read-path failures are logged, never surfaced. A rejected token sends the
/// screen back to login.
pub(crate) fn note_read_failure(what: &str, err: &ClientError, redirect: &mut Option<Route>) {
    error!("Failed to load {what}: {err}");
    if err.is_unauthorized() {
        *redirect = Some(Route::Login);
    }
}
