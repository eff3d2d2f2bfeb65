//
//  twitter-rest
//  cli/dm.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Direct message commands

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};

use crate::api::params::UserRef;
use crate::api::{DirectMessagesQuery, SentDirectMessagesQuery};
use crate::interactive::{can_prompt, prompt_confirm_with_default, prompt_input};
use crate::output::OutputWriter;

use super::display::{write_items, DirectMessageItem};
use super::{connect, GlobalOptions};

/// Read and send direct messages
#[derive(Args, Debug)]
pub struct DmCommand {
    #[command(subcommand)]
    pub command: DmSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum DmSubcommand {
    /// List received direct messages
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Send a direct message
    Send(SendArgs),

    /// Delete a direct message
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// List messages you sent instead
    #[arg(long)]
    pub sent: bool,

    /// Number of messages (max 200)
    #[arg(long, short = 'n')]
    pub count: Option<u32>,

    /// Only messages newer than this id
    #[arg(long)]
    pub since_id: Option<u64>,

    /// Only messages at or older than this id
    #[arg(long)]
    pub max_id: Option<u64>,

    /// Page of sent messages
    #[arg(long, requires = "sent")]
    pub page: Option<u32>,
}

#[derive(Args, Debug)]
pub struct SendArgs {
    /// Recipient screen name (with or without @) or numeric id
    pub user: String,

    /// Message text; prompted for when omitted
    pub text: Option<String>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Message id
    pub id: u64,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl DmCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = connect()?;
        let writer = OutputWriter::new(global.format());

        match &self.command {
            DmSubcommand::List(args) => {
                let messages = if args.sent {
                    client
                        .sent_direct_messages(&SentDirectMessagesQuery {
                            since_id: args.since_id,
                            max_id: args.max_id,
                            count: args.count,
                            page: args.page,
                            include_entities: false,
                        })
                        .await
                } else {
                    client
                        .direct_messages(&DirectMessagesQuery {
                            since_id: args.since_id,
                            max_id: args.max_id,
                            count: args.count,
                            include_entities: false,
                        })
                        .await
                }
                .context("Failed to fetch direct messages")?;

                let items: Vec<DirectMessageItem> =
                    messages.iter().map(DirectMessageItem::from).collect();
                write_items(&writer, &DirectMessageItem::header(), &items, "message(s)")
            }
            DmSubcommand::Send(args) => {
                let recipient = UserRef::parse(&args.user)?;
                let text = match &args.text {
                    Some(text) => text.clone(),
                    None if can_prompt(global.no_prompt) => prompt_input("Message")?,
                    None => bail!("Message text is required when prompts are disabled"),
                };

                let message = client
                    .send_direct_message(&text, &recipient)
                    .await
                    .with_context(|| format!("Failed to message {}", args.user))?;

                if writer.is_json() {
                    return writer.write(&DirectMessageItem::from(&message));
                }
                writer.write_success(&format!("Sent message {}", message.id.unwrap_or_default()));
                Ok(())
            }
            DmSubcommand::Delete(args) => {
                if !args.yes
                    && can_prompt(global.no_prompt)
                    && !prompt_confirm_with_default(&format!("Delete message {}?", args.id), false)?
                {
                    writer.write_info("Cancelled.");
                    return Ok(());
                }

                let message = client
                    .destroy_direct_message(args.id, false)
                    .await
                    .with_context(|| format!("Failed to delete message {}", args.id))?;

                if writer.is_json() {
                    return writer.write(&DirectMessageItem::from(&message));
                }
                writer.write_success(&format!("Deleted message {}", args.id));
                Ok(())
            }
        }
    }
}
