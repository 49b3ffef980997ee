//! ih - IssueHub CLI
//!
//! Every command prints the JSON view of the screen it drives.
//!
//! # Examples
//!
//! ```bash
//! # Log in (the session is remembered in ~/.issuehub/session.json)
//! ih login --email ada@example.com --password secret
//!
//! # Open issues of project 1, highest priority first
//! ih project show 1 --status open --sort priority --pretty
//!
//! # Move an issue along
//! ih issue status 7 in_progress
//! ```

use ih_cli::{AuthSession, Cli, Client, FileSessionStore, dispatch, logger};
use ih_config::Config;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e.display_message());
            return ExitCode::FAILURE;
        }
    };

    // Explicit flag > IH_API_URL > config.toml > default
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e.display_message());
        return ExitCode::FAILURE;
    }

    if let Err(e) = logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    ) {
        eprintln!("Error: {}", e.display_message());
        return ExitCode::FAILURE;
    }
    config.log_summary();

    let session_path = match config.session_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {}", e.display_message());
            return ExitCode::FAILURE;
        }
    };

    let store = Arc::new(FileSessionStore::open(session_path));
    let client = Client::new(&config.api.base_url, store);
    let mut auth = AuthSession::new(client.clone());
    auth.restore().await;

    let result = dispatch(cli.command, &client, &mut auth).await;

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            log::debug!("Command failed: {e}");
            eprintln!("Error: {}", e.display_message());
            ExitCode::FAILURE
        }
    }
}
