use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "ih")]
#[command(about = "IssueHub client: projects, issues and comments from the terminal")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides config.toml and IH_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
