//
//  twitter-rest
//  cli/search.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Search commands

use anyhow::{Context, Result};
use clap::Args;

use crate::api::{Geocode, SearchQuery, UsersSearchQuery};
use crate::output::OutputWriter;

use super::display::{write_items, StatusListItem, UserListItem};
use super::{connect, GlobalOptions};

/// Search recent statuses or users
#[derive(Args, Debug)]
pub struct SearchCommand {
    /// Search terms, using Twitter's search operators
    pub query: String,

    /// Search user profiles instead of statuses
    #[arg(long)]
    pub users: bool,

    /// Number of results
    #[arg(long, short = 'n', default_value_t = 15)]
    pub count: u32,

    /// Result ranking
    #[arg(long, value_parser = ["mixed", "popular", "recent"])]
    pub result_type: Option<String>,

    /// Restrict to a language (ISO 639-1 code)
    #[arg(long)]
    pub lang: Option<String>,

    /// Only statuses newer than this id
    #[arg(long)]
    pub since_id: Option<u64>,

    /// Only statuses at or older than this id
    #[arg(long)]
    pub max_id: Option<u64>,

    /// Only statuses created before this date (YYYY-MM-DD)
    #[arg(long)]
    pub until: Option<String>,

    /// Only statuses near a point, as LAT,LONG,RADIUS (e.g. 37.78,-122.40,1mi)
    #[arg(long, value_parser = parse_geocode)]
    pub geocode: Option<Geocode>,

    /// Results page when searching users
    #[arg(long, default_value_t = 1)]
    pub page: u32,
}

fn parse_geocode(raw: &str) -> Result<Geocode, String> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    let [latitude, longitude, radius] = parts.as_slice() else {
        return Err("expected LAT,LONG,RADIUS".to_string());
    };
    let latitude = latitude
        .parse::<f64>()
        .map_err(|_| format!("invalid latitude '{latitude}'"))?;
    let longitude = longitude
        .parse::<f64>()
        .map_err(|_| format!("invalid longitude '{longitude}'"))?;
    if radius.is_empty() {
        return Err("radius must not be empty".to_string());
    }

    Ok(Geocode {
        latitude,
        longitude,
        radius: radius.to_string(),
    })
}

impl SearchCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = connect()?;
        let writer = OutputWriter::new(global.format());

        if self.users {
            let query = UsersSearchQuery {
                page: self.page,
                count: self.count,
                ..Default::default()
            };
            let users = client
                .users_search(&self.query, &query)
                .await
                .context("User search failed")?;
            let items: Vec<UserListItem> = users.iter().map(UserListItem::from).collect();
            return write_items(&writer, &UserListItem::header(), &items, "user(s)");
        }

        let statuses = client
            .search(&self.to_query())
            .await
            .context("Search failed")?;
        let items: Vec<StatusListItem> = statuses.iter().map(StatusListItem::from).collect();
        write_items(&writer, &StatusListItem::header(), &items, "status(es)")
    }

    fn to_query(&self) -> SearchQuery {
        let term = self.query.trim();
        let mut query = SearchQuery {
            term: (!term.is_empty()).then(|| term.to_string()),
            geocode: self.geocode.clone(),
            since_id: self.since_id,
            max_id: self.max_id,
            until: self.until.clone(),
            count: self.count,
            lang: self.lang.clone(),
            ..Default::default()
        };
        if let Some(result_type) = &self.result_type {
            query.result_type = Some(result_type.clone());
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn parse(args: &[&str]) -> SearchCommand {
        match Cli::try_parse_from(args).unwrap().command {
            Commands::Search(cmd) => cmd,
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_geocode() {
        let geocode = parse_geocode("37.781157, -122.398720, 1mi").unwrap();
        assert_eq!(geocode.latitude, 37.781157);
        assert_eq!(geocode.longitude, -122.39872);
        assert_eq!(geocode.radius, "1mi");

        assert!(parse_geocode("37.7,-122.3").is_err());
        assert!(parse_geocode("north,-122.3,1mi").is_err());
        assert!(parse_geocode("37.7,-122.3,").is_err());
    }

    #[test]
    fn test_query_from_args() {
        let cmd = parse(&["tw", "search", "rustlang", "-n", "50", "--result-type", "recent"]);
        let query = cmd.to_query();
        assert_eq!(query.term.as_deref(), Some("rustlang"));
        assert_eq!(query.count, 50);
        assert_eq!(query.result_type.as_deref(), Some("recent"));
    }

    #[test]
    fn test_default_result_type_is_kept() {
        let query = parse(&["tw", "search", "rust"]).to_query();
        assert_eq!(query.result_type.as_deref(), Some("mixed"));
        assert_eq!(query.count, 15);
    }

    #[test]
    fn test_blank_term_becomes_none() {
        let query = parse(&["tw", "search", "  "]).to_query();
        assert!(query.term.is_none());
    }

    #[test]
    fn test_unknown_result_type_rejected() {
        assert!(Cli::try_parse_from(["tw", "search", "rust", "--result-type", "best"]).is_err());
    }
}
