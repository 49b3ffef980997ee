use clap::Subcommand;

#[derive(Subcommand)]
pub enum CommentCommands {
    /// List comments on an issue
    List {
        /// Issue ID
        issue_id: i64,
    },

    /// Add a comment to an issue
    Add {
        /// Issue ID
        issue_id: i64,

        /// Comment text
        #[arg(long)]
        body: String,
    },
}
