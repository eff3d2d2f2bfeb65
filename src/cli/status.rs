//
//  twitter-rest
//  cli/status.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Status commands
//!
//! Show, post, delete, retweet and favorite single statuses. Status ids may
//! be given as numbers or as `twitter.com/<user>/status/<id>` links.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::api::models::Status;
use crate::api::params::{estimate_status_length, parse_id};
use crate::api::{StatusQuery, UpdateOptions, CHARACTER_LIMIT};
use crate::interactive::{can_prompt, prompt_confirm_with_default, prompt_editor};
use crate::output::{print_field, OutputWriter, TableOutput};

use super::display::{write_items, StatusDetail, StatusListItem};
use super::{connect, GlobalOptions};

/// Show, post, and manage statuses
#[derive(Args, Debug)]
pub struct StatusCommand {
    #[command(subcommand)]
    pub command: StatusSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum StatusSubcommand {
    /// Show a status
    #[command(visible_alias = "view")]
    Show(IdArgs),

    /// Post a new status
    #[command(visible_alias = "tweet")]
    Post(PostArgs),

    /// Delete one of your statuses
    Delete(DeleteArgs),

    /// Retweet a status
    Retweet(IdArgs),

    /// List retweets of a status
    Retweets(RetweetsArgs),

    /// Mark a status as favorite
    #[command(visible_alias = "like")]
    Favorite(IdArgs),

    /// Remove a status from favorites
    #[command(visible_alias = "unlike")]
    Unfavorite(IdArgs),

    /// Check how long a status counts as, after link shortening
    Length(LengthArgs),
}

#[derive(Args, Debug)]
pub struct IdArgs {
    /// Status id or link
    #[arg(value_parser = parse_status_id)]
    pub id: u64,
}

#[derive(Args, Debug)]
pub struct PostArgs {
    /// Status text; '-' reads standard input, omit to open your editor
    pub text: Option<String>,

    /// Reply to this status id or link
    #[arg(long, value_parser = parse_status_id)]
    pub reply_to: Option<u64>,

    /// Attach an image
    #[arg(long, short = 'm', conflicts_with = "thread")]
    pub media: Option<PathBuf>,

    /// Latitude of the status location
    #[arg(long, requires = "long", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude of the status location
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub long: Option<f64>,

    /// Place id of the status location
    #[arg(long)]
    pub place_id: Option<String>,

    /// Split long text into a series of statuses
    #[arg(long, short = 't')]
    pub thread: bool,

    /// Suffix for every part of a thread but the last
    #[arg(long, default_value = "…", requires = "thread")]
    pub continuation: String,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Status id or link
    #[arg(value_parser = parse_status_id)]
    pub id: u64,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(Args, Debug)]
pub struct RetweetsArgs {
    /// Status id or link
    #[arg(value_parser = parse_status_id)]
    pub id: u64,

    /// Number of retweets (max 100)
    #[arg(long, short = 'n')]
    pub count: Option<u32>,
}

#[derive(Args, Debug)]
pub struct LengthArgs {
    /// Text to measure; '-' reads standard input
    pub text: String,
}

/// Accepts a bare id or a status link.
fn parse_status_id(raw: &str) -> Result<u64, String> {
    let raw = raw.trim();
    let candidate = match raw.find("/status/") {
        Some(pos) => raw[pos + "/status/".len()..]
            .split(['/', '?', '#'])
            .next()
            .unwrap_or_default(),
        None => raw,
    };
    parse_id("id", candidate).map_err(|e| e.to_string())
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read standard input")?;
    Ok(text.trim_end().to_string())
}

impl StatusCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            StatusSubcommand::Show(args) => self.show(args, global).await,
            StatusSubcommand::Post(args) => self.post(args, global).await,
            StatusSubcommand::Delete(args) => self.delete(args, global).await,
            StatusSubcommand::Retweet(args) => self.retweet(args, global).await,
            StatusSubcommand::Retweets(args) => self.retweets(args, global).await,
            StatusSubcommand::Favorite(args) => self.favorite(args, global, true).await,
            StatusSubcommand::Unfavorite(args) => self.favorite(args, global, false).await,
            StatusSubcommand::Length(args) => self.length(args, global),
        }
    }

    async fn show(&self, args: &IdArgs, global: &GlobalOptions) -> Result<()> {
        let client = connect()?;
        let status = client
            .status(args.id, &StatusQuery::default())
            .await
            .with_context(|| format!("Failed to fetch status {}", args.id))?;

        OutputWriter::new(global.format()).write(&StatusDetail::from(&status))
    }

    async fn post(&self, args: &PostArgs, global: &GlobalOptions) -> Result<()> {
        let writer = OutputWriter::new(global.format());
        let client = connect()?;

        let text = match args.text.as_deref() {
            Some("-") => read_stdin()?,
            Some(text) => text.to_string(),
            None if can_prompt(global.no_prompt) => prompt_editor(None)?.unwrap_or_default(),
            None => bail!("Status text is required when prompts are disabled"),
        };
        if text.trim().is_empty() {
            bail!("Aborted: empty status");
        }

        let options = UpdateOptions {
            in_reply_to_status_id: args.reply_to,
            latitude: args.lat,
            longitude: args.long,
            place_id: args.place_id.clone(),
            display_coordinates: args.lat.is_some(),
            ..Default::default()
        };

        let posted: Vec<Status> = if args.thread {
            client
                .post_updates(&text, Some(&args.continuation), &options)
                .await
                .context("Failed to post thread")?
        } else if let Some(path) = &args.media {
            let bytes = std::fs::read(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let filename = path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| "media".to_string());
            vec![client
                .post_update_with_media(&text, bytes, &filename, &options)
                .await
                .context("Failed to post status")?]
        } else {
            vec![client
                .post_update(&text, &options)
                .await
                .context("Failed to post status")?]
        };

        if writer.is_json() {
            let details: Vec<StatusDetail> = posted.iter().map(StatusDetail::from).collect();
            return crate::output::write_json(&details);
        }
        for status in &posted {
            writer.write_success(&format!("Posted {}", status_link(status)));
        }
        Ok(())
    }

    async fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        let writer = OutputWriter::new(global.format());
        let client = connect()?;

        if !args.yes
            && can_prompt(global.no_prompt)
            && !prompt_confirm_with_default(&format!("Delete status {}?", args.id), false)?
        {
            writer.write_info("Cancelled.");
            return Ok(());
        }

        let status = client
            .destroy_status(args.id, false)
            .await
            .with_context(|| format!("Failed to delete status {}", args.id))?;

        if writer.is_json() {
            return writer.write(&StatusDetail::from(&status));
        }
        writer.write_success(&format!("Deleted status {}", args.id));
        Ok(())
    }

    async fn retweet(&self, args: &IdArgs, global: &GlobalOptions) -> Result<()> {
        let writer = OutputWriter::new(global.format());
        let client = connect()?;

        let status = client
            .retweet(args.id, false)
            .await
            .with_context(|| format!("Failed to retweet status {}", args.id))?;

        if writer.is_json() {
            return writer.write(&StatusDetail::from(&status));
        }
        writer.write_success(&format!("Retweeted status {}", args.id));
        Ok(())
    }

    async fn retweets(&self, args: &RetweetsArgs, global: &GlobalOptions) -> Result<()> {
        let client = connect()?;
        let statuses = client
            .retweets(args.id, args.count, false)
            .await
            .with_context(|| format!("Failed to fetch retweets of {}", args.id))?;

        let writer = OutputWriter::new(global.format());
        let items: Vec<StatusListItem> = statuses.iter().map(StatusListItem::from).collect();
        write_items(&writer, &StatusListItem::header(), &items, "retweet(s)")
    }

    async fn favorite(&self, args: &IdArgs, global: &GlobalOptions, add: bool) -> Result<()> {
        let writer = OutputWriter::new(global.format());
        let client = connect()?;

        let status = if add {
            client.create_favorite(args.id, true).await
        } else {
            client.destroy_favorite(args.id, true).await
        }
        .with_context(|| format!("Failed to update favorite on status {}", args.id))?;

        if writer.is_json() {
            return writer.write(&StatusDetail::from(&status));
        }
        let verb = if add { "Favorited" } else { "Unfavorited" };
        writer.write_success(&format!("{} status {}", verb, args.id));
        Ok(())
    }

    fn length(&self, args: &LengthArgs, global: &GlobalOptions) -> Result<()> {
        let text = if args.text == "-" {
            read_stdin()?
        } else {
            args.text.clone()
        };

        let shortlink_size = crate::config::Config::load()?.api.shortlink_size;
        let report = LengthReport::measure(&text, shortlink_size);
        OutputWriter::new(global.format()).write(&report)?;

        if !report.fits {
            bail!(
                "Text must be less than or equal to {} characters",
                CHARACTER_LIMIT
            );
        }
        Ok(())
    }
}

/// `https://twitter.com/<user>/status/<id>`, or just the id without a user.
fn status_link(status: &Status) -> String {
    let id = status.id.unwrap_or_default();
    match status.user.as_ref().and_then(|u| u.screen_name.as_deref()) {
        Some(name) => format!("https://twitter.com/{}/status/{}", name, id),
        None => format!("status {}", id),
    }
}

#[derive(Debug, Serialize)]
struct LengthReport {
    length: usize,
    limit: usize,
    remaining: i64,
    fits: bool,
}

impl LengthReport {
    fn measure(text: &str, shortlink_size: usize) -> Self {
        let length = estimate_status_length(text, shortlink_size);
        Self {
            length,
            limit: CHARACTER_LIMIT,
            remaining: CHARACTER_LIMIT as i64 - length as i64,
            fits: length <= CHARACTER_LIMIT,
        }
    }
}

impl TableOutput for LengthReport {
    fn print_table(&self, color: bool) {
        print_field("Length", &format!("{}/{}", self.length, self.limit), color);
        let remaining = self.remaining.to_string();
        let remaining = match (color, self.fits) {
            (true, true) => console::style(remaining).green().to_string(),
            (true, false) => console::style(remaining).red().bold().to_string(),
            (false, _) => remaining,
        };
        print_field("Remaining", &remaining, color);
    }

    fn print_markdown(&self) {
        println!("| Length | Limit | Remaining |");
        println!("|---|---|---|");
        println!("| {} | {} | {} |", self.length, self.limit, self.remaining);
    }
}
