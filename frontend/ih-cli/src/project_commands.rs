use chrono::NaiveDate;
use clap::Subcommand;
use ih_core::{IssuePriority, IssueSort, IssueStatus, ProjectRole};

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List your projects
    List,

    /// Create a project
    Create {
        #[arg(long)]
        name: String,

        /// Short unique key (stored upper case)
        #[arg(long)]
        key: String,

        #[arg(long)]
        description: Option<String>,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<NaiveDate>,
    },

    /// Show a project with its members and issues
    Show {
        /// Project ID
        id: i64,

        /// Search text
        #[arg(long)]
        q: Option<String>,

        /// open, in_progress, resolved, closed
        #[arg(long)]
        status: Option<IssueStatus>,

        /// low, medium, high, critical
        #[arg(long)]
        priority: Option<IssuePriority>,

        /// Assignee user ID
        #[arg(long)]
        assignee: Option<i64>,

        /// created_at, updated_at, priority, status
        #[arg(long, default_value = "created_at")]
        sort: IssueSort,
    },

    /// Add an existing user to a project
    AddMember {
        /// Project ID
        id: i64,

        #[arg(long)]
        email: String,

        /// member or maintainer
        #[arg(long, default_value = "member")]
        role: ProjectRole,
    },
}
