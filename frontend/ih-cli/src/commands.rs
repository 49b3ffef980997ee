use crate::{
    comment_commands::CommentCommands, issue_commands::IssueCommands,
    project_commands::ProjectCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account and log in
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Log in and remember the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Project operations
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },

    /// Issue operations
    Issue {
        #[command(subcommand)]
        action: IssueCommands,
    },

    /// Comment operations
    Comment {
        #[command(subcommand)]
        action: CommentCommands,
    },
}
