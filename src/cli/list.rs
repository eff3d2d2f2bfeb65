//
//  twitter-rest
//  cli/list.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! List commands
//!
//! Lists are named as `OWNER/SLUG` (for example `@jack/rust`) or by numeric
//! id.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::api::models::{ListMode, ListResource};
use crate::api::params::{parse_id, ListRef, UserRef};
use crate::api::TwitterError;
use crate::output::OutputWriter;

use super::display::{write_items, ListItem};
use super::{connect, GlobalOptions};

/// Manage lists and subscriptions
#[derive(Args, Debug)]
pub struct ListCommand {
    #[command(subcommand)]
    pub command: ListSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ListSubcommand {
    /// Lists a user owns
    #[command(visible_alias = "ls")]
    Owned(OwnerArgs),

    /// Lists a user subscribes to
    Subscriptions(SubscriptionsArgs),

    /// Create a list
    Create(CreateArgs),

    /// Delete a list you own
    Delete(ListArg),

    /// Subscribe to a list
    Subscribe(ListArg),

    /// Unsubscribe from a list
    Unsubscribe(ListArg),
}

#[derive(Args, Debug)]
pub struct OwnerArgs {
    /// Screen name (with or without @) or numeric id
    pub user: String,

    /// Lists per page
    #[arg(long, short = 'n')]
    pub count: Option<u32>,
}

#[derive(Args, Debug)]
pub struct SubscriptionsArgs {
    /// Screen name (with or without @) or numeric id
    pub user: String,

    /// Lists per page
    #[arg(long, short = 'n')]
    pub count: Option<u32>,

    /// Page cursor from a previous call
    #[arg(long, allow_hyphen_values = true)]
    pub cursor: Option<i64>,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// List name
    pub name: String,

    /// Visibility
    #[arg(long, value_parser = ["public", "private"])]
    pub mode: Option<String>,

    /// Description
    #[arg(long, short = 'd')]
    pub description: Option<String>,
}

#[derive(Args, Debug)]
pub struct ListArg {
    /// OWNER/SLUG or numeric list id
    #[arg(value_parser = parse_list)]
    pub list: ListRef,
}

fn parse_list(raw: &str) -> Result<ListRef, String> {
    let list = match raw.split_once('/') {
        Some((owner, slug)) => UserRef::parse(owner).and_then(|owner| ListRef::slug(owner, slug)),
        None => parse_id("list_id", raw).map(ListRef::Id),
    };
    list.map_err(|e: TwitterError| e.to_string())
}

impl ListCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = connect()?;
        let writer = OutputWriter::new(global.format());

        let (lists, verb): (Vec<ListResource>, Option<&str>) = match &self.command {
            ListSubcommand::Owned(args) => (
                client
                    .lists(&UserRef::parse(&args.user)?, args.count)
                    .await
                    .context("Failed to fetch lists")?,
                None,
            ),
            ListSubcommand::Subscriptions(args) => (
                client
                    .subscriptions(&UserRef::parse(&args.user)?, args.count, args.cursor)
                    .await
                    .context("Failed to fetch subscriptions")?,
                None,
            ),
            ListSubcommand::Create(args) => {
                let mode = args
                    .mode
                    .as_deref()
                    .map(str::parse::<ListMode>)
                    .transpose()?;
                let list = client
                    .create_list(&args.name, mode, args.description.as_deref())
                    .await
                    .context("Failed to create list")?;
                (vec![list], Some("Created"))
            }
            ListSubcommand::Delete(args) => (
                vec![client.destroy_list(&args.list).await.context("Failed to delete list")?],
                Some("Deleted"),
            ),
            ListSubcommand::Subscribe(args) => (
                vec![client
                    .create_subscription(&args.list)
                    .await
                    .context("Failed to subscribe")?],
                Some("Subscribed to"),
            ),
            ListSubcommand::Unsubscribe(args) => (
                vec![client
                    .destroy_subscription(&args.list)
                    .await
                    .context("Failed to unsubscribe")?],
                Some("Unsubscribed from"),
            ),
        };

        let items: Vec<ListItem> = lists.iter().map(ListItem::from).collect();
        match verb {
            Some(verb) if !writer.is_json() => {
                for item in &items {
                    writer.write_success(&format!("{} {}", verb, item.full_name));
                }
                Ok(())
            }
            Some(_) => writer.write_list(&items),
            None => write_items(&writer, &ListItem::header(), &items, "list(s)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        assert_eq!(parse_list("42"), Ok(ListRef::Id(42)));
        assert_eq!(
            parse_list("@jack/rust"),
            Ok(ListRef::Slug {
                owner: UserRef::ScreenName("jack".to_string()),
                slug: "rust".to_string(),
            })
        );
        assert_eq!(
            parse_list("12/rust"),
            Ok(ListRef::Slug {
                owner: UserRef::Id(12),
                slug: "rust".to_string(),
            })
        );
        assert!(parse_list("@jack/").is_err());
        assert!(parse_list("rust").is_err());
    }
}
