//
//  twitter-rest
//  cli/display.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Display types shared by the commands.
//!
//! Each type flattens a record into what `tw` prints and implements
//! [`TableOutput`]. JSON output serializes the same structs, so scripts see
//! stable field names instead of raw API payloads.

use anyhow::Result;
use console::style;
use serde::Serialize;

use crate::api::models::{DirectMessage, ListResource, Status, Trend, User};
use crate::output::{
    format_bool, format_count, format_handle, markdown_cell, print_field, OutputFormat, OutputWriter,
    TableOutput,
};
use crate::util::{format_time, single_line, truncate};

fn or_dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("-")
}

fn status_handle(status: &Status) -> String {
    status
        .user
        .as_ref()
        .map(User::handle)
        .unwrap_or_else(|| "-".to_string())
}

fn print_wrapped(text: &str) {
    for line in textwrap::wrap(text, 78) {
        println!("  {}", line);
    }
}

// Statuses

#[derive(Debug, Serialize)]
pub struct StatusListItem {
    pub id: u64,
    pub user: String,
    pub text: String,
    pub age: Option<String>,
    pub retweets: Option<u64>,
    pub favorites: Option<u64>,
}

impl From<&Status> for StatusListItem {
    fn from(status: &Status) -> Self {
        Self {
            id: status.id.unwrap_or_default(),
            user: status_handle(status),
            text: status.text.clone().unwrap_or_default(),
            age: status.relative_created_at(),
            retweets: status.retweet_count,
            favorites: status.favorite_count,
        }
    }
}

impl StatusListItem {
    pub fn header() -> String {
        format!("{:<20} {:<16} {:<16} {}", "ID", "USER", "AGE", "TEXT")
    }
}

impl TableOutput for StatusListItem {
    fn print_table(&self, color: bool) {
        let id_display = if color {
            style(self.id).dim().to_string()
        } else {
            self.id.to_string()
        };
        let age = self.age.as_deref().unwrap_or("-");

        println!(
            "{:<20} {:<16} {:<16} {}",
            id_display,
            format_handle(&self.user, color),
            age,
            truncate(&single_line(&self.text), 60)
        );
    }

    fn print_markdown(&self) {
        println!(
            "| {} | {} | {} | {} |",
            self.id,
            self.user,
            self.age.as_deref().unwrap_or("-"),
            markdown_cell(&self.text)
        );
    }

    fn markdown_header() -> Option<String> {
        Some("| ID | User | Age | Text |".to_string())
    }
}

#[derive(Debug, Serialize)]
pub struct StatusDetail {
    pub id: u64,
    pub user: String,
    pub name: Option<String>,
    pub text: String,
    pub created_at: Option<String>,
    pub age: Option<String>,
    pub source: Option<String>,
    pub in_reply_to_status_id: Option<u64>,
    pub retweets: Option<u64>,
    pub favorites: Option<u64>,
    pub retweeted: bool,
    pub favorited: bool,
    pub hashtags: Vec<String>,
    pub urls: Vec<String>,
}

impl From<&Status> for StatusDetail {
    fn from(status: &Status) -> Self {
        Self {
            id: status.id.unwrap_or_default(),
            user: status_handle(status),
            name: status.user.as_ref().and_then(|u| u.name.clone()),
            text: status.text.clone().unwrap_or_default(),
            created_at: status.created_at_in_seconds().map(format_time),
            age: status.relative_created_at(),
            source: status.source.clone(),
            in_reply_to_status_id: status.in_reply_to_status_id,
            retweets: status.retweet_count,
            favorites: status.favorite_count,
            retweeted: status.retweeted.unwrap_or(false),
            favorited: status.favorited.unwrap_or(false),
            hashtags: status
                .hashtags()
                .iter()
                .filter_map(|tag| tag.text.as_ref().map(|t| format!("#{t}")))
                .collect(),
            urls: status
                .urls()
                .iter()
                .filter_map(|url| url.expanded_url.clone().or_else(|| url.url.clone()))
                .collect(),
        }
    }
}

impl TableOutput for StatusDetail {
    fn print_table(&self, color: bool) {
        let author = match &self.name {
            Some(name) => format!("{} ({})", format_handle(&self.user, color), name),
            None => format_handle(&self.user, color),
        };
        println!("{}", author);
        println!();
        print_wrapped(&self.text);
        println!();

        print_field("ID", &self.id.to_string(), color);
        print_field("Posted", or_dash(self.created_at.as_deref()), color);
        if let Some(age) = &self.age {
            print_field("Age", age, color);
        }
        if let Some(reply_to) = self.in_reply_to_status_id {
            print_field("In reply to", &reply_to.to_string(), color);
        }
        print_field("Retweets", &format_count(self.retweets), color);
        print_field("Favorites", &format_count(self.favorites), color);
        print_field("Retweeted", &format_bool(self.retweeted, color), color);
        print_field("Favorited", &format_bool(self.favorited, color), color);
        if !self.hashtags.is_empty() {
            print_field("Hashtags", &self.hashtags.join(" "), color);
        }
        for url in &self.urls {
            print_field("Link", url, color);
        }
    }

    fn print_markdown(&self) {
        println!("## {} ({})", self.user, self.id);
        println!();
        println!("{}", self.text);
        println!();
        println!("- **Posted**: {}", or_dash(self.created_at.as_deref()));
        println!("- **Retweets**: {}", format_count(self.retweets));
        println!("- **Favorites**: {}", format_count(self.favorites));
        for url in &self.urls {
            println!("- <{}>", url);
        }
    }
}

// Users

#[derive(Debug, Serialize)]
pub struct UserListItem {
    pub id: u64,
    pub screen_name: String,
    pub name: Option<String>,
    pub followers: Option<u64>,
    pub friends: Option<u64>,
    pub verified: bool,
}

impl From<&User> for UserListItem {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.unwrap_or_default(),
            screen_name: user.handle(),
            name: user.name.clone(),
            followers: user.followers_count,
            friends: user.friends_count,
            verified: user.verified.unwrap_or(false),
        }
    }
}

impl UserListItem {
    pub fn header() -> String {
        format!(
            "{:<20} {:<24} {:>12} {:>12} {}",
            "ID", "USER", "FOLLOWERS", "FOLLOWING", "NAME"
        )
    }
}

impl TableOutput for UserListItem {
    fn print_table(&self, color: bool) {
        let mut handle = format_handle(&self.screen_name, color);
        if self.verified {
            handle.push_str(" ✓");
        }
        println!(
            "{:<20} {:<24} {:>12} {:>12} {}",
            self.id,
            handle,
            format_count(self.followers),
            format_count(self.friends),
            self.name.as_deref().unwrap_or("")
        );
    }

    fn print_markdown(&self) {
        println!(
            "| {} | {} | {} | {} | {} |",
            self.id,
            self.screen_name,
            markdown_cell(self.name.as_deref().unwrap_or("")),
            format_count(self.followers),
            format_count(self.friends)
        );
    }

    fn markdown_header() -> Option<String> {
        Some("| ID | User | Name | Followers | Following |".to_string())
    }
}

#[derive(Debug, Serialize)]
pub struct UserDetail {
    pub id: u64,
    pub screen_name: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub url: Option<String>,
    pub followers: Option<u64>,
    pub friends: Option<u64>,
    pub statuses: Option<u64>,
    pub favourites: Option<u64>,
    pub listed: Option<u64>,
    pub protected: bool,
    pub verified: bool,
    pub created_at: Option<String>,
    pub profile_image: Option<String>,
}

impl From<&User> for UserDetail {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.unwrap_or_default(),
            screen_name: user.handle(),
            name: user.name.clone(),
            description: user.description.clone(),
            location: user.location.clone(),
            url: user.url.clone(),
            followers: user.followers_count,
            friends: user.friends_count,
            statuses: user.statuses_count,
            favourites: user.favourites_count,
            listed: user.listed_count,
            protected: user.protected.unwrap_or(false),
            verified: user.verified.unwrap_or(false),
            created_at: user.created_at.clone(),
            profile_image: user.profile_image().map(str::to_string),
        }
    }
}

impl TableOutput for UserDetail {
    fn print_table(&self, color: bool) {
        let title = match &self.name {
            Some(name) if color => format!("{} {}", style(name).bold(), format_handle(&self.screen_name, color)),
            Some(name) => format!("{} {}", name, self.screen_name),
            None => format_handle(&self.screen_name, color),
        };
        println!("{}", title);
        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            println!();
            print_wrapped(description);
        }
        println!();

        print_field("ID", &self.id.to_string(), color);
        print_field("Location", or_dash(self.location.as_deref()), color);
        print_field("URL", or_dash(self.url.as_deref()), color);
        print_field("Followers", &format_count(self.followers), color);
        print_field("Following", &format_count(self.friends), color);
        print_field("Statuses", &format_count(self.statuses), color);
        print_field("Favorites", &format_count(self.favourites), color);
        print_field("Listed", &format_count(self.listed), color);
        print_field("Protected", &format_bool(self.protected, color), color);
        print_field("Verified", &format_bool(self.verified, color), color);
        print_field("Joined", or_dash(self.created_at.as_deref()), color);
    }

    fn print_markdown(&self) {
        println!(
            "## {} ({})",
            self.name.as_deref().unwrap_or(&self.screen_name),
            self.screen_name
        );
        println!();
        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            println!("{}", description);
            println!();
        }
        println!("- **Followers**: {}", format_count(self.followers));
        println!("- **Following**: {}", format_count(self.friends));
        println!("- **Statuses**: {}", format_count(self.statuses));
        println!("- **Location**: {}", or_dash(self.location.as_deref()));
    }
}

// Direct messages

#[derive(Debug, Serialize)]
pub struct DirectMessageItem {
    pub id: u64,
    pub sender: String,
    pub recipient: String,
    pub text: String,
    pub sent_at: Option<String>,
}

impl From<&DirectMessage> for DirectMessageItem {
    fn from(message: &DirectMessage) -> Self {
        let name = |screen_name: &Option<String>, id: Option<u64>| match (screen_name, id) {
            (Some(name), _) => format!("@{name}"),
            (None, Some(id)) => id.to_string(),
            (None, None) => "-".to_string(),
        };
        Self {
            id: message.id.unwrap_or_default(),
            sender: name(&message.sender_screen_name, message.sender_id),
            recipient: name(&message.recipient_screen_name, message.recipient_id),
            text: message.text.clone().unwrap_or_default(),
            sent_at: message.created_at_in_seconds().map(format_time),
        }
    }
}

impl DirectMessageItem {
    pub fn header() -> String {
        format!("{:<20} {:<16} {:<16} {:<20} {}", "ID", "FROM", "TO", "SENT", "TEXT")
    }
}

impl TableOutput for DirectMessageItem {
    fn print_table(&self, color: bool) {
        println!(
            "{:<20} {:<16} {:<16} {:<20} {}",
            self.id,
            format_handle(&self.sender, color),
            format_handle(&self.recipient, color),
            or_dash(self.sent_at.as_deref()),
            truncate(&single_line(&self.text), 50)
        );
    }

    fn print_markdown(&self) {
        println!(
            "| {} | {} | {} | {} | {} |",
            self.id,
            self.sender,
            self.recipient,
            or_dash(self.sent_at.as_deref()),
            markdown_cell(&self.text)
        );
    }

    fn markdown_header() -> Option<String> {
        Some("| ID | From | To | Sent | Text |".to_string())
    }
}

// Trends

#[derive(Debug, Serialize)]
pub struct TrendItem {
    pub name: String,
    pub query: Option<String>,
    pub url: Option<String>,
    pub as_of: Option<String>,
}

impl From<&Trend> for TrendItem {
    fn from(trend: &Trend) -> Self {
        Self {
            name: trend.name.clone().unwrap_or_default(),
            query: trend.query.clone(),
            url: trend.url.clone(),
            as_of: trend.timestamp.map(format_time),
        }
    }
}

impl TableOutput for TrendItem {
    fn print_table(&self, color: bool) {
        let name = if color {
            style(&self.name).cyan().to_string()
        } else {
            self.name.clone()
        };
        println!("{:<40} {}", name, or_dash(self.url.as_deref()));
    }

    fn print_markdown(&self) {
        println!(
            "| {} | {} |",
            markdown_cell(&self.name),
            or_dash(self.url.as_deref())
        );
    }

    fn markdown_header() -> Option<String> {
        Some("| Trend | URL |".to_string())
    }
}

// Lists

#[derive(Debug, Serialize)]
pub struct ListItem {
    pub id: u64,
    pub full_name: String,
    pub mode: Option<String>,
    pub members: Option<u64>,
    pub subscribers: Option<u64>,
    pub description: Option<String>,
}

impl From<&ListResource> for ListItem {
    fn from(list: &ListResource) -> Self {
        Self {
            id: list.id.unwrap_or_default(),
            full_name: list
                .full_name
                .clone()
                .or_else(|| list.name.clone())
                .unwrap_or_default(),
            mode: list.mode.map(|m| m.to_string()),
            members: list.member_count,
            subscribers: list.subscriber_count,
            description: list.description.clone(),
        }
    }
}

impl ListItem {
    pub fn header() -> String {
        format!(
            "{:<20} {:<32} {:<8} {:>8} {:>12}",
            "ID", "LIST", "MODE", "MEMBERS", "SUBSCRIBERS"
        )
    }
}

impl TableOutput for ListItem {
    fn print_table(&self, color: bool) {
        let name = if color {
            style(&self.full_name).bold().to_string()
        } else {
            self.full_name.clone()
        };
        println!(
            "{:<20} {:<32} {:<8} {:>8} {:>12}",
            self.id,
            name,
            self.mode.as_deref().unwrap_or("-"),
            format_count(self.members),
            format_count(self.subscribers)
        );
    }

    fn print_markdown(&self) {
        println!(
            "| {} | {} | {} | {} | {} |",
            self.id,
            markdown_cell(&self.full_name),
            self.mode.as_deref().unwrap_or("-"),
            format_count(self.members),
            format_count(self.subscribers)
        );
    }

    fn markdown_header() -> Option<String> {
        Some("| ID | List | Mode | Members | Subscribers |".to_string())
    }
}

/// Prints a bold column header and rule before a table-format list.
pub fn print_list_header(header: &str, color: bool) {
    if color {
        println!("{}", style(header).bold());
    } else {
        println!("{}", header);
    }
    println!("{}", "-".repeat(80));
}

/// Writes a list with the column header and item count around it in table
/// format. JSON output is always an array, even when empty.
pub fn write_items<T: Serialize + TableOutput>(
    writer: &OutputWriter,
    header: &str,
    items: &[T],
    noun: &str,
) -> Result<()> {
    let table = writer.format() == OutputFormat::Table;

    if items.is_empty() && !writer.is_json() {
        println!("No {} found.", noun);
        return Ok(());
    }

    if table {
        print_list_header(header, writer.color_enabled());
    }
    writer.write_list(items)?;
    if table {
        println!();
        println!("Showing {} {}", items.len(), noun);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Record;
    use serde_json::json;

    #[test]
    fn test_status_item_from_record() {
        let status = Status::from_value(json!({
            "id": 42,
            "text": "hello\nworld",
            "user": {"screen_name": "jack"},
            "retweet_count": 3
        }));
        let item = StatusListItem::from(&status);
        assert_eq!(item.id, 42);
        assert_eq!(item.user, "@jack");
        assert_eq!(item.retweets, Some(3));
        assert_eq!(item.favorites, None);
    }

    #[test]
    fn test_status_detail_collects_entities() {
        let status = Status::from_value(json!({
            "id": 1,
            "text": "#rust https://t.co/x",
            "entities": {
                "hashtags": [{"text": "rust"}],
                "urls": [{"url": "https://t.co/x", "expanded_url": "https://rust-lang.org"}]
            }
        }));
        let detail = StatusDetail::from(&status);
        assert_eq!(detail.hashtags, vec!["#rust"]);
        assert_eq!(detail.urls, vec!["https://rust-lang.org"]);
        assert_eq!(detail.user, "-");
    }

    #[test]
    fn test_direct_message_falls_back_to_ids() {
        let message = DirectMessage::from_value(json!({
            "id": 7,
            "sender_id": 12,
            "recipient_screen_name": "jack",
            "text": "hi"
        }));
        let item = DirectMessageItem::from(&message);
        assert_eq!(item.sender, "12");
        assert_eq!(item.recipient, "@jack");
    }

    #[test]
    fn test_list_item_prefers_full_name() {
        let list = ListResource::from_value(json!({"id": 5, "name": "rust", "full_name": "@jack/rust"}));
        assert_eq!(ListItem::from(&list).full_name, "@jack/rust");

        let list = ListResource::from_value(json!({"id": 5, "name": "rust"}));
        assert_eq!(ListItem::from(&list).full_name, "rust");
    }

    #[test]
    fn test_json_field_names() {
        let user = User::from_value(json!({"id": 1, "screen_name": "jack", "followers_count": 10}));
        let value = serde_json::to_value(UserListItem::from(&user)).unwrap();
        assert_eq!(value["screen_name"], "@jack");
        assert_eq!(value["followers"], 10);
        assert_eq!(value["verified"], false);
    }
}
