//
//  twitter-rest
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod auth;
mod completion;
mod config;
mod display;
mod dm;
mod limits;
mod list;
mod search;
mod status;
mod timeline;
mod trends;
mod user;

pub use auth::AuthCommand;
pub use completion::CompletionCommand;
pub use config::ConfigCommand;
pub use dm::DmCommand;
pub use limits::LimitsCommand;
pub use list::ListCommand;
pub use search::SearchCommand;
pub use status::StatusCommand;
pub use timeline::TimelineCommand;
pub use trends::TrendsCommand;
pub use user::UserCommand;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api::{TransportError, TwitterClient, TwitterError};
use crate::auth::KeyringStore;
use crate::config::Config;
use crate::exit_codes;
use crate::output::OutputFormat;

/// Twitter's "rate limit exceeded" error code.
const RATE_LIMIT_EXCEEDED: i64 = 88;

/// tw - Work with Twitter from the command line
#[derive(Parser, Debug)]
#[command(
    name = "tw",
    version,
    about = "Work with Twitter from the command line",
    long_about = "tw is a CLI for the Twitter REST API v1.1.\n\n\
                  It brings timelines, search, statuses, direct messages, and more to your terminal.",
    propagate_version = true,
    after_help = "Use 'tw <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Output format as Markdown
    #[arg(long, global = true, conflicts_with = "json")]
    pub markdown: bool,

    /// Disable interactive prompts
    #[arg(long, global = true, env = "TW_NO_PROMPT")]
    pub no_prompt: bool,
}

impl GlobalOptions {
    pub fn format(&self) -> OutputFormat {
        OutputFormat::from_flags(self.json, self.markdown)
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage stored credentials
    #[command(visible_alias = "login")]
    Auth(AuthCommand),

    /// Search recent statuses or users
    Search(SearchCommand),

    /// Read timelines
    #[command(visible_alias = "tl")]
    Timeline(TimelineCommand),

    /// Show, post, and manage statuses
    #[command(visible_alias = "s")]
    Status(StatusCommand),

    /// Show users and their social graph
    #[command(visible_alias = "u")]
    User(UserCommand),

    /// Read and send direct messages
    Dm(DmCommand),

    /// Show trending topics
    Trends(TrendsCommand),

    /// Manage lists and subscriptions
    List(ListCommand),

    /// Show API rate limits
    Limits(LimitsCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),

    /// Print version information
    Version,
}

/// Builds a client from the config file and stored credentials.
///
/// Credentials come from the keyring with `TW_*` environment variables
/// layered on top. A client without complete credentials still works for
/// the endpoints that allow anonymous access.
pub(crate) fn connect() -> Result<TwitterClient> {
    let config = Config::load()?;
    let mut client = TwitterClient::new(config.to_client_config())?;

    let stored = match KeyringStore::new().load_credentials() {
        Ok(stored) => stored,
        Err(e) => {
            tracing::debug!("Keyring unavailable: {e:#}");
            None
        }
    };
    client.set_credentials(stored.unwrap_or_default().with_env_overrides());

    Ok(client)
}

/// Maps an error to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    let Some(err) = err.downcast_ref::<TwitterError>() else {
        return exit_codes::ERROR;
    };

    if err.has_api_code(RATE_LIMIT_EXCEEDED) {
        return exit_codes::RATE_LIMIT;
    }

    match err {
        TwitterError::AuthenticationRequired => exit_codes::AUTH_ERROR,
        TwitterError::InvalidArgument(_) => exit_codes::USAGE,
        TwitterError::Transport(TransportError::Status { status, .. }) => match status {
            401 => exit_codes::AUTH_ERROR,
            404 => exit_codes::NOT_FOUND,
            429 => exit_codes::RATE_LIMIT,
            _ => exit_codes::ERROR,
        },
        _ => exit_codes::ERROR,
    }
}
