use clap::Subcommand;
use ih_core::{IssuePriority, IssueStatus};

#[derive(Subcommand)]
pub enum IssueCommands {
    /// Create an issue in a project
    Create {
        #[arg(long)]
        project_id: i64,

        #[arg(long)]
        title: String,

        #[arg(long)]
        description: Option<String>,

        /// low, medium, high, critical
        #[arg(long, default_value = "medium")]
        priority: IssuePriority,

        /// Must be a project member
        #[arg(long)]
        assignee_id: Option<i64>,
    },

    /// Show an issue with its comments
    Show {
        /// Issue ID
        id: i64,
    },

    /// Change the status of an issue
    Status {
        /// Issue ID
        id: i64,

        /// open, in_progress, resolved, closed
        status: IssueStatus,
    },

    /// Assign an issue to a project member, or unassign it
    Assign {
        /// Issue ID
        id: i64,

        #[arg(long, conflicts_with = "unassign", required_unless_present = "unassign")]
        assignee_id: Option<i64>,

        #[arg(long)]
        unassign: bool,
    },

    /// Edit title, description or priority
    Edit {
        /// Issue ID
        id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        priority: Option<IssuePriority>,
    },

    /// Delete an issue
    Delete {
        /// Issue ID
        id: i64,
    },
}
