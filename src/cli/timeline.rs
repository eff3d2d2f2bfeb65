//
//  twitter-rest
//  cli/timeline.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Timeline commands

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::api::params::UserRef;
use crate::api::{FavoritesQuery, MentionsQuery, RetweetsOfMeQuery, TimelineQuery, UserTimelineQuery};
use crate::output::OutputWriter;

use super::display::{write_items, StatusListItem};
use super::{connect, GlobalOptions};

/// Read timelines
#[derive(Args, Debug)]
pub struct TimelineCommand {
    #[command(subcommand)]
    pub command: TimelineSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum TimelineSubcommand {
    /// Statuses from you and the accounts you follow
    Home(PagingArgs),

    /// A user's statuses (yours by default)
    User(UserArgs),

    /// Statuses mentioning you
    Mentions(PagingArgs),

    /// Statuses a user marked as favorite (yours by default)
    #[command(visible_alias = "likes")]
    Favorites(FavoritesArgs),

    /// Your statuses that others retweeted
    #[command(name = "retweets-of-me")]
    RetweetsOfMe(PagingArgs),
}

#[derive(Args, Debug, Clone)]
pub struct PagingArgs {
    /// Number of statuses (max 200)
    #[arg(long, short = 'n')]
    pub count: Option<u32>,

    /// Only statuses newer than this id
    #[arg(long)]
    pub since_id: Option<u64>,

    /// Only statuses at or older than this id
    #[arg(long)]
    pub max_id: Option<u64>,

    /// Leave replies out
    #[arg(long)]
    pub exclude_replies: bool,
}

#[derive(Args, Debug)]
pub struct UserArgs {
    /// Screen name (with or without @) or numeric id
    pub user: Option<String>,

    #[command(flatten)]
    pub paging: PagingArgs,

    /// Leave retweets out
    #[arg(long)]
    pub no_retweets: bool,
}

#[derive(Args, Debug)]
pub struct FavoritesArgs {
    /// Screen name (with or without @) or numeric id
    pub user: Option<String>,

    /// Number of statuses (max 200)
    #[arg(long, short = 'n')]
    pub count: Option<u32>,

    /// Only statuses newer than this id
    #[arg(long)]
    pub since_id: Option<u64>,

    /// Only statuses at or older than this id
    #[arg(long)]
    pub max_id: Option<u64>,
}

impl TimelineCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = connect()?;

        let statuses = match &self.command {
            TimelineSubcommand::Home(args) => client
                .home_timeline(&TimelineQuery {
                    count: args.count,
                    since_id: args.since_id,
                    max_id: args.max_id,
                    exclude_replies: args.exclude_replies,
                    ..Default::default()
                })
                .await
                .context("Failed to fetch home timeline")?,
            TimelineSubcommand::User(args) => client
                .user_timeline(&user_timeline_query(args)?)
                .await
                .context("Failed to fetch user timeline")?,
            TimelineSubcommand::Mentions(args) => client
                .mentions(&MentionsQuery {
                    count: args.count,
                    since_id: args.since_id,
                    max_id: args.max_id,
                    ..Default::default()
                })
                .await
                .context("Failed to fetch mentions")?,
            TimelineSubcommand::Favorites(args) => client
                .favorites(&FavoritesQuery {
                    user: args.user.as_deref().map(UserRef::parse).transpose()?,
                    count: args.count,
                    since_id: args.since_id,
                    max_id: args.max_id,
                    include_entities: false,
                })
                .await
                .context("Failed to fetch favorites")?,
            TimelineSubcommand::RetweetsOfMe(args) => client
                .retweets_of_me(&RetweetsOfMeQuery {
                    count: args.count,
                    since_id: args.since_id,
                    max_id: args.max_id,
                    ..Default::default()
                })
                .await
                .context("Failed to fetch retweets")?,
        };

        let writer = OutputWriter::new(global.format());
        let items: Vec<StatusListItem> = statuses.iter().map(StatusListItem::from).collect();
        write_items(&writer, &StatusListItem::header(), &items, "status(es)")
    }
}

fn user_timeline_query(args: &UserArgs) -> Result<UserTimelineQuery> {
    Ok(UserTimelineQuery {
        user: args.user.as_deref().map(UserRef::parse).transpose()?,
        count: args.paging.count,
        since_id: args.paging.since_id,
        max_id: args.paging.max_id,
        include_rts: !args.no_retweets,
        trim_user: false,
        exclude_replies: args.paging.exclude_replies,
    })
}
