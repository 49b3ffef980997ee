//! ih-cli library
//!
//! API client, session handling and screen controllers of the IssueHub
//! client. The `ih` binary drives them from the command line.

pub mod client;
pub mod logger;
pub mod screens;
pub mod session;

pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod comment_commands;
pub(crate) mod dispatch;
pub(crate) mod issue_commands;
pub(crate) mod project_commands;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use client::{CliClientResult, Client, ClientError};
pub use commands::Commands;
pub use comment_commands::CommentCommands;
pub use dispatch::dispatch;
pub use issue_commands::IssueCommands;
pub use project_commands::ProjectCommands;
pub use session::{AuthSession, FileSessionStore, MemorySessionStore, SessionStore};
