//
//  twitter-rest
//  cli/auth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Credential commands for the Twitter CLI.
//!
//! Twitter's v1.1 API uses OAuth 1.0a with application (consumer) and user
//! (access token) key pairs, all four issued from the developer portal.
//! `tw auth login` checks them against `account/verify_credentials` and then
//! stores them in the system keyring.

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use console::style;
use serde::Serialize;

use crate::api::TwitterClient;
use crate::auth::{
    Credentials, KeyringStore, ENV_ACCESS_TOKEN, ENV_ACCESS_TOKEN_SECRET, ENV_CONSUMER_KEY,
    ENV_CONSUMER_SECRET,
};
use crate::config::Config;
use crate::interactive::{can_prompt, prompt_confirm_with_default, prompt_input, prompt_password};
use crate::output::{print_field, OutputWriter, TableOutput};

use super::GlobalOptions;

/// Manage stored credentials.
#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Store OAuth credentials in the system keyring
    Login(LoginArgs),

    /// Remove stored credentials
    Logout(LogoutArgs),

    /// View authentication status
    Status(StatusArgs),
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Application consumer key
    #[arg(long)]
    pub consumer_key: Option<String>,

    /// Application consumer secret
    #[arg(long)]
    pub consumer_secret: Option<String>,

    /// User access token
    #[arg(long)]
    pub access_token: Option<String>,

    /// User access token secret
    #[arg(long)]
    pub access_token_secret: Option<String>,

    /// Store the credentials without checking them against Twitter
    #[arg(long)]
    pub no_verify: bool,
}

#[derive(Args, Debug)]
pub struct LogoutArgs {
    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Do not contact Twitter to verify the credentials
    #[arg(long)]
    pub offline: bool,
}

impl AuthCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            AuthSubcommand::Login(args) => login(args, global).await,
            AuthSubcommand::Logout(args) => logout(args, global).await,
            AuthSubcommand::Status(args) => status(args, global).await,
        }
    }
}

/// Resolves one credential value: flag, then environment, then a prompt.
fn resolve(
    flag: &Option<String>,
    env: &Option<String>,
    label: &str,
    env_name: &str,
    secret: bool,
    global: &GlobalOptions,
) -> Result<String> {
    if let Some(value) = flag.as_ref().or(env.as_ref()) {
        return Ok(value.clone());
    }

    if !can_prompt(global.no_prompt) {
        bail!(
            "Missing {}. Pass --{} or set {}.",
            label,
            label.replace(' ', "-"),
            env_name
        );
    }

    let value = if secret {
        prompt_password(&capitalize(label))?
    } else {
        prompt_input(&capitalize(label))?
    };
    if value.is_empty() {
        bail!("{} must not be empty", capitalize(label));
    }
    Ok(value)
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Performs the login flow.
async fn login(args: &LoginArgs, global: &GlobalOptions) -> Result<()> {
    let writer = OutputWriter::new(global.format());
    let env = Credentials::default().with_env_overrides();

    let credentials = Credentials::new(
        &resolve(&args.consumer_key, &env.consumer_key, "consumer key", ENV_CONSUMER_KEY, false, global)?,
        &resolve(
            &args.consumer_secret,
            &env.consumer_secret,
            "consumer secret",
            ENV_CONSUMER_SECRET,
            true,
            global,
        )?,
        &resolve(&args.access_token, &env.access_token_key, "access token", ENV_ACCESS_TOKEN, false, global)?,
        &resolve(
            &args.access_token_secret,
            &env.access_token_secret,
            "access token secret",
            ENV_ACCESS_TOKEN_SECRET,
            true,
            global,
        )?,
    );

    if !args.no_verify {
        writer.write_info("Verifying credentials...");
        let config = Config::load()?;
        let mut client = TwitterClient::new(config.to_client_config())?;
        client.set_credentials(credentials.clone());

        match client.verify_credentials().await? {
            Some(user) => writer.write_success(&format!("Authenticated as {}", user.handle())),
            None => bail!("Twitter rejected these credentials"),
        }
    } else {
        writer.write_warning("Credentials were not verified. Run 'tw auth status' to check them.");
    }

    let keyring = KeyringStore::new();
    keyring
        .store_credentials(&credentials)
        .context("Failed to store credentials in the system keyring")?;

    writer.write_success("Credentials saved");
    Ok(())
}

/// Removes stored credentials.
async fn logout(args: &LogoutArgs, global: &GlobalOptions) -> Result<()> {
    let writer = OutputWriter::new(global.format());
    let keyring = KeyringStore::new();

    if keyring.load_credentials()?.is_none() {
        writer.write_info("Not logged in.");
        return Ok(());
    }

    if !args.yes
        && can_prompt(global.no_prompt)
        && !prompt_confirm_with_default("Remove stored Twitter credentials?", false)?
    {
        writer.write_info("Cancelled.");
        return Ok(());
    }

    keyring.delete_credentials()?;
    writer.write_success("Logged out");
    Ok(())
}

#[derive(Debug, Serialize)]
struct AuthStatus {
    authenticated: bool,
    consumer_key: Option<String>,
    access_token: Option<String>,
    consumer_key_source: &'static str,
    access_token_source: &'static str,
    user: Option<String>,
    verified: Option<bool>,
}

impl TableOutput for AuthStatus {
    fn print_table(&self, color: bool) {
        let state = match (self.authenticated, self.verified) {
            (true, Some(false)) => style("Credentials rejected").red(),
            (true, _) => style("Logged in").green(),
            (false, _) => style("Not logged in").yellow(),
        };
        if color {
            println!("{}", state.bold());
        } else {
            println!("{}", state.force_styling(false));
        }
        println!();

        print_field(
            "Consumer key",
            &format!(
                "{} ({})",
                self.consumer_key.as_deref().unwrap_or("-"),
                self.consumer_key_source
            ),
            color,
        );
        print_field(
            "Access token",
            &format!(
                "{} ({})",
                self.access_token.as_deref().unwrap_or("-"),
                self.access_token_source
            ),
            color,
        );
        if let Some(user) = &self.user {
            print_field("User", user, color);
        }
        if !self.authenticated {
            println!();
            println!("Run 'tw auth login' to store credentials.");
        }
    }

    fn print_markdown(&self) {
        println!("- **Authenticated**: {}", self.authenticated);
        println!("- **Consumer key**: {}", self.consumer_key.as_deref().unwrap_or("-"));
        println!("- **Access token**: {}", self.access_token.as_deref().unwrap_or("-"));
        if let Some(user) = &self.user {
            println!("- **User**: {}", user);
        }
    }
}

/// Shows where credentials come from and, unless offline, whom they belong to.
async fn status(args: &StatusArgs, global: &GlobalOptions) -> Result<()> {
    let writer = OutputWriter::new(global.format());

    let stored = match KeyringStore::new().load_credentials() {
        Ok(stored) => stored.unwrap_or_default(),
        Err(e) => {
            tracing::debug!("Keyring unavailable: {e:#}");
            Credentials::default()
        }
    };
    let env = Credentials::default().with_env_overrides();
    let credentials = stored.clone().with_env_overrides();

    let source = |env_value: &Option<String>, stored_value: &Option<String>| {
        if env_value.is_some() {
            "environment"
        } else if stored_value.is_some() {
            "keyring"
        } else {
            "unset"
        }
    };

    let mut report = AuthStatus {
        authenticated: credentials.is_complete(),
        consumer_key: credentials.consumer_key.as_deref().map(mask),
        access_token: credentials.access_token_key.as_deref().map(mask),
        consumer_key_source: source(&env.consumer_key, &stored.consumer_key),
        access_token_source: source(&env.access_token_key, &stored.access_token_key),
        user: None,
        verified: None,
    };

    if report.authenticated && !args.offline {
        let config = Config::load()?;
        let mut client = TwitterClient::new(config.to_client_config())?;
        client.set_credentials(credentials);

        let user = client.verify_credentials().await?;
        report.verified = Some(user.is_some());
        report.user = user.map(|u| u.handle());
    }

    writer.write(&report)
}

/// Keeps the first four characters of a key visible.
fn mask(value: &str) -> String {
    let visible: String = value.chars().take(4).collect();
    format!("{}****", visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask() {
        assert_eq!(mask("abcdefgh"), "abcd****");
        assert_eq!(mask("ab"), "ab****");
    }

    #[test]
    fn test_resolve_prefers_flag_over_env() {
        let global = GlobalOptions {
            no_prompt: true,
            ..Default::default()
        };
        let value = resolve(
            &Some("flag".to_string()),
            &Some("env".to_string()),
            "consumer key",
            ENV_CONSUMER_KEY,
            false,
            &global,
        )
        .unwrap();
        assert_eq!(value, "flag");

        let value = resolve(&None, &Some("env".to_string()), "consumer key", ENV_CONSUMER_KEY, false, &global)
            .unwrap();
        assert_eq!(value, "env");
    }

    #[test]
    fn test_resolve_without_prompt_names_the_flag() {
        let global = GlobalOptions {
            no_prompt: true,
            ..Default::default()
        };
        let err = resolve(&None, &None, "access token secret", ENV_ACCESS_TOKEN_SECRET, true, &global)
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("--access-token-secret"));
        assert!(message.contains("TW_ACCESS_TOKEN_SECRET"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("consumer key"), "Consumer key");
        assert_eq!(capitalize(""), "");
    }
}
