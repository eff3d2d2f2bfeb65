//
//  twitter-rest
//  cli/trends.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Trending topics

use anyhow::{Context, Result};
use clap::Args;

use crate::api::endpoints::trends::WORLDWIDE_WOEID;
use crate::output::{OutputFormat, OutputWriter};

use super::display::{write_items, TrendItem};
use super::{connect, GlobalOptions};

/// Show trending topics
#[derive(Args, Debug)]
pub struct TrendsCommand {
    /// Where On Earth id of the location (1 is worldwide)
    #[arg(long, short = 'w', default_value_t = WORLDWIDE_WOEID)]
    pub woeid: u64,

    /// Leave hashtags out
    #[arg(long)]
    pub no_hashtags: bool,
}

impl TrendsCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = connect()?;
        let exclude = self.no_hashtags.then_some("hashtags");

        let trends = client
            .trends_woeid(self.woeid, exclude)
            .await
            .with_context(|| format!("Failed to fetch trends for {}", self.woeid))?;

        let writer = OutputWriter::new(global.format());
        let items: Vec<TrendItem> = trends.iter().map(TrendItem::from).collect();

        if writer.format() == OutputFormat::Table {
            if let Some(as_of) = items.first().and_then(|t| t.as_of.as_deref()) {
                println!("Trends as of {}", as_of);
                println!();
            }
        }
        write_items(&writer, &format!("{:<40} {}", "TREND", "URL"), &items, "trend(s)")
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_defaults_to_worldwide() {
        let Commands::Trends(cmd) = Cli::try_parse_from(["tw", "trends"]).unwrap().command else {
            panic!("expected trends");
        };
        assert_eq!(cmd.woeid, 1);
        assert!(!cmd.no_hashtags);
    }
}
