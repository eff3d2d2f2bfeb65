//
//  twitter-rest
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Twitter REST Library
//!
//! A client library for the Twitter REST API v1.1, plus the `tw` command-line
//! tool built on it.
//!
//! ## Overview
//!
//! [`api::TwitterClient`] binds the search, timeline, status, user,
//! friendship, direct message, favorite, list, trend and account endpoints.
//! Responses become typed records; failures become one error type that
//! separates local validation, missing credentials, Twitter-side errors and
//! transport failures.
//!
//! ## Features
//!
//! - **OAuth 1.0a**: HMAC-SHA1 request signing from four credential values
//! - **Lenient Records**: Missing or mistyped fields become `None`, never errors
//! - **Cursor Pagination**: Multi-page endpoints are followed to the end, with
//!   cycle detection and a page cap
//! - **Pluggable Transport**: Requests go through a [`api::transport::Transport`]
//!   trait; `reqwest` is the default
//! - **Scriptable CLI**: Table, JSON and Markdown output
//!
//! ## Module Structure
//!
//! - [`api`]: The client, endpoints, records and errors
//! - [`auth`]: Credentials, request signing and keyring storage
//! - [`cli`]: Command-line interface definitions using clap
//! - [`config`]: Configuration file management
//! - [`output`]: Output formatting (Table, JSON, Markdown)
//! - [`interactive`]: Interactive prompts
//! - [`util`]: Utility functions
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use twitter_rest::api::{TimelineQuery, TwitterClient};
//! use twitter_rest::auth::Credentials;
//! use twitter_rest::Config;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::load()?;
//! let mut client = TwitterClient::new(config.to_client_config())?;
//! client.set_credentials(Credentials::default().with_env_overrides());
//!
//! for status in client.home_timeline(&TimelineQuery::default()).await? {
//!     println!("{}", status.text.unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```

/// Twitter REST API v1.1 client.
///
/// Contains [`api::TwitterClient`] and its endpoint methods, the record types
/// built from responses, request parameter encoding, the response parser,
/// cursor pagination and the transport seam.
pub mod api;

/// Authentication and credential management.
///
/// Handles:
/// - The four OAuth 1.0a credential values
/// - HMAC-SHA1 request signing
/// - Secure credential storage via system keychain
pub mod auth;

/// Command-line interface definitions.
///
/// Contains all CLI commands, arguments, and subcommands defined using the clap derive API.
/// Each command module handles parsing and execution of its respective functionality.
pub mod cli;

/// Configuration file management.
///
/// Manages the CLI's configuration stored in platform-specific locations:
/// - Linux: `~/.config/tw/config.toml`
/// - macOS: `~/Library/Application Support/tw/config.toml`
/// - Windows: `%APPDATA%\tw\config\config.toml`
///
/// `TW_CONFIG` overrides the location.
pub mod config;

/// Interactive terminal UI components.
///
/// Text input, masked secret input, confirmations and editor integration for
/// composing statuses.
pub mod interactive;

/// Output formatting for different modes.
///
/// Provides formatters for:
/// - Table format: Human-readable tables for interactive use
/// - JSON format: Structured output for scripting and automation
/// - Markdown format: Documentation-friendly output
pub mod output;

/// Utility functions and helpers.
///
/// Time formatting (absolute and relative) and string truncation.
pub mod util;

/// Re-export of the main CLI struct for convenient access.
///
/// The [`Cli`] struct represents the root command and is the entry point
/// for parsing command-line arguments.
///
/// # Example
///
/// ```rust,no_run
/// use clap::Parser;
/// use twitter_rest::Cli;
///
/// let cli = Cli::parse();
/// // Handle cli.command...
/// ```
pub use cli::Cli;

/// Re-export of the configuration struct.
///
/// # Example
///
/// ```rust,no_run
/// use twitter_rest::Config;
///
/// let config = Config::load().expect("Failed to load config");
/// if let Some(source) = config.get("source") {
///     println!("Posting from: {}", source);
/// }
/// ```
pub use config::Config;

/// Application name constant.
///
/// The name of the CLI binary, used for completions and configuration paths.
///
/// # Value
///
/// `"tw"`
pub const APP_NAME: &str = "tw";

/// Application version constant.
///
/// The current version of the crate, derived from Cargo.toml at compile time
/// using the `CARGO_PKG_VERSION` environment variable.
///
/// # Example
///
/// ```rust
/// use twitter_rest::VERSION;
///
/// println!("tw version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// Standardized exit codes following Unix conventions, allowing scripts
/// to programmatically detect the outcome of CLI operations.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `16-31`: Operation-related issues
/// - `32+`: External service issues
///
/// # Example
///
/// ```rust,no_run
/// use twitter_rest::exit_codes;
/// use std::process;
///
/// // Exit with authentication error
/// process::exit(exit_codes::AUTH_ERROR);
/// ```
pub mod exit_codes {
    /// Successful execution.
    ///
    /// # Value
    ///
    /// `0`
    pub const SUCCESS: i32 = 0;

    /// General error.
    ///
    /// An unspecified error occurred during execution.
    /// Check stderr for details.
    ///
    /// # Value
    ///
    /// `1`
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    ///
    /// The command was invoked with invalid arguments, or a value failed
    /// validation before any request was sent.
    ///
    /// # Value
    ///
    /// `2`
    pub const USAGE: i32 = 2;

    /// Authentication required or failed.
    ///
    /// Credentials are missing, incomplete, or were rejected by Twitter.
    /// Run `tw auth login` to store them.
    ///
    /// # Value
    ///
    /// `4`
    pub const AUTH_ERROR: i32 = 4;

    /// Resource not found.
    ///
    /// The requested status, user or list does not exist or is not visible
    /// to the authenticating user.
    ///
    /// # Value
    ///
    /// `8`
    pub const NOT_FOUND: i32 = 8;

    /// API rate limit exceeded.
    ///
    /// Twitter's rate limit for the endpoint has been used up.
    /// `tw limits` shows when it resets.
    ///
    /// # Value
    ///
    /// `32`
    pub const RATE_LIMIT: i32 = 32;
}
