//
//  twitter-rest
//  cli/user.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User commands

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};

use crate::api::params::UserRef;
use crate::api::{FriendsQuery, IdsQuery, LookupQuery, TwitterClient};
use crate::output::{write_json, OutputFormat, OutputWriter};

use super::display::{write_items, UserDetail, UserListItem};
use super::{connect, GlobalOptions};

/// Show users and their social graph
#[derive(Args, Debug)]
pub struct UserCommand {
    #[command(subcommand)]
    pub command: UserSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum UserSubcommand {
    /// Show a user's profile (yours by default)
    #[command(visible_alias = "view")]
    Show(ShowArgs),

    /// List a user's followers (yours by default)
    Followers(GraphArgs),

    /// List the accounts a user follows (yours by default)
    #[command(visible_alias = "following")]
    Friends(GraphArgs),

    /// Show several users at once
    Lookup(LookupArgs),

    /// Follow a user
    Follow(FollowArgs),

    /// Stop following a user
    Unfollow(UserArg),
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Screen name (with or without @) or numeric id
    pub user: Option<String>,
}

#[derive(Args, Debug)]
pub struct UserArg {
    /// Screen name (with or without @) or numeric id
    pub user: String,
}

#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Screen name (with or without @) or numeric id
    pub user: Option<String>,

    /// Print ids only; much cheaper for large accounts
    #[arg(long)]
    pub ids: bool,
}

#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Screen names (with or without @) or numeric ids
    #[arg(required = true, num_args = 1..)]
    pub users: Vec<String>,
}

#[derive(Args, Debug)]
pub struct FollowArgs {
    /// Screen name (with or without @) or numeric id
    pub user: String,

    /// Also enable device notifications for the user
    #[arg(long)]
    pub notify: bool,
}

fn parse_user(raw: Option<&str>) -> Result<Option<UserRef>> {
    Ok(raw.map(UserRef::parse).transpose()?)
}

/// Splits mixed user arguments into ids and screen names.
fn lookup_query(users: &[String]) -> Result<LookupQuery> {
    let mut query = LookupQuery::default();
    for raw in users {
        match UserRef::parse(raw)? {
            UserRef::Id(id) => query.user_ids.push(id),
            UserRef::ScreenName(name) => query.screen_names.push(name),
        }
    }
    Ok(query)
}

impl UserCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = connect()?;
        let writer = OutputWriter::new(global.format());

        match &self.command {
            UserSubcommand::Show(args) => {
                let user = match parse_user(args.user.as_deref())? {
                    Some(user) => client.user(&user, false).await?,
                    None => match client.verify_credentials().await? {
                        Some(user) => user,
                        None => bail!("Twitter rejected the stored credentials. Run 'tw auth login'."),
                    },
                };
                writer.write(&UserDetail::from(&user))
            }
            UserSubcommand::Followers(args) => {
                graph(&client, &writer, args, Graph::Followers).await
            }
            UserSubcommand::Friends(args) => graph(&client, &writer, args, Graph::Friends).await,
            UserSubcommand::Lookup(args) => {
                let users = client
                    .users_lookup(&lookup_query(&args.users)?)
                    .await
                    .context("User lookup failed")?;
                let items: Vec<UserListItem> = users.iter().map(UserListItem::from).collect();
                write_items(&writer, &UserListItem::header(), &items, "user(s)")
            }
            UserSubcommand::Follow(args) => {
                let user = client
                    .create_friendship(&UserRef::parse(&args.user)?, args.notify)
                    .await
                    .with_context(|| format!("Failed to follow {}", args.user))?;
                if writer.is_json() {
                    return writer.write(&UserDetail::from(&user));
                }
                writer.write_success(&format!("Following {}", user.handle()));
                Ok(())
            }
            UserSubcommand::Unfollow(args) => {
                let user = client
                    .destroy_friendship(&UserRef::parse(&args.user)?)
                    .await
                    .with_context(|| format!("Failed to unfollow {}", args.user))?;
                if writer.is_json() {
                    return writer.write(&UserDetail::from(&user));
                }
                writer.write_success(&format!("Unfollowed {}", user.handle()));
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Graph {
    Followers,
    Friends,
}

async fn graph(
    client: &TwitterClient,
    writer: &OutputWriter,
    args: &GraphArgs,
    which: Graph,
) -> Result<()> {
    let user = parse_user(args.user.as_deref())?;

    if args.ids {
        let query = IdsQuery {
            user,
            ..Default::default()
        };
        let ids = match which {
            Graph::Followers => client.follower_ids(&query).await,
            Graph::Friends => client.friend_ids(&query).await,
        }
        .context("Failed to fetch ids")?;

        match writer.format() {
            OutputFormat::Json => write_json(&ids)?,
            _ => {
                for id in &ids {
                    println!("{}", id);
                }
            }
        }
        return Ok(());
    }

    let query = FriendsQuery {
        user,
        skip_status: true,
        ..Default::default()
    };
    let users = match which {
        Graph::Followers => client.followers(&query).await,
        Graph::Friends => client.friends(&query).await,
    }
    .context("Failed to fetch users")?;

    let items: Vec<UserListItem> = users.iter().map(UserListItem::from).collect();
    write_items(writer, &UserListItem::header(), &items, "user(s)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_query_splits_ids_and_names() {
        let query = lookup_query(&[
            "@jack".to_string(),
            "12".to_string(),
            "biz".to_string(),
        ])
        .unwrap();
        assert_eq!(query.user_ids, vec![12]);
        assert_eq!(query.screen_names, vec!["jack", "biz"]);
        assert!(query.include_entities);
    }

    #[test]
    fn test_lookup_query_rejects_blank_names() {
        assert!(lookup_query(&["@".to_string()]).is_err());
    }

    #[test]
    fn test_parse_user() {
        assert_eq!(parse_user(None).unwrap(), None);
        assert_eq!(
            parse_user(Some("@jack")).unwrap(),
            Some(UserRef::ScreenName("jack".to_string()))
        );
    }
}
