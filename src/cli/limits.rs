//
//  twitter-rest
//  cli/limits.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Rate limit commands

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use serde_json::Value;

use crate::api::endpoints::account::hit_frequency;
use crate::api::models::lenient::{as_epoch, as_unsigned};
use crate::output::{print_field, OutputWriter, TableBuilder, TableOutput};
use crate::util::{format_relative_time_at, format_time};

use super::{connect, GlobalOptions};

/// Show API rate limits
#[derive(Args, Debug)]
pub struct LimitsCommand {
    /// Resource families to report, comma separated (e.g. statuses,search)
    #[arg(long, short = 'r', value_delimiter = ',')]
    pub resources: Vec<String>,

    /// Only print the shortest safe interval between requests, in seconds
    #[arg(long)]
    pub frequency: bool,
}

#[derive(Debug, Serialize)]
struct LimitRow {
    resource: String,
    endpoint: String,
    limit: Option<u64>,
    remaining: Option<u64>,
    reset: Option<i64>,
}

#[derive(Debug, Serialize)]
struct LimitsReport {
    rows: Vec<LimitRow>,
    #[serde(skip)]
    now: i64,
}

impl LimitsReport {
    /// Reads both the per-endpoint `resources` layout and the older flat
    /// `remaining_hits` / `hourly_limit` / `reset_time` layout.
    fn from_value(status: &Value, now: i64) -> Self {
        let mut rows = Vec::new();

        if let Some(resources) = status.get("resources").and_then(Value::as_object) {
            for (resource, endpoints) in resources {
                let Some(endpoints) = endpoints.as_object() else {
                    continue;
                };
                for (endpoint, limit) in endpoints {
                    rows.push(LimitRow {
                        resource: resource.clone(),
                        endpoint: endpoint.clone(),
                        limit: limit.get("limit").and_then(as_unsigned),
                        remaining: limit.get("remaining").and_then(as_unsigned),
                        reset: limit.get("reset").and_then(as_epoch),
                    });
                }
            }
        } else if status.get("remaining_hits").is_some() {
            rows.push(LimitRow {
                resource: "account".to_string(),
                endpoint: "*".to_string(),
                limit: status.get("hourly_limit").and_then(as_unsigned),
                remaining: status.get("remaining_hits").and_then(as_unsigned),
                reset: status.get("reset_time").and_then(as_epoch),
            });
        }

        rows.sort_by(|a, b| (&a.resource, &a.endpoint).cmp(&(&b.resource, &b.endpoint)));
        Self { rows, now }
    }

    fn reset_text(&self, reset: Option<i64>) -> String {
        match reset {
            Some(at) if at > self.now => {
                let minutes = at.saturating_sub(self.now).saturating_add(59) / 60;
                format!("{} (in {} min)", format_time(at), minutes)
            }
            Some(at) => format!("{} ({})", format_time(at), format_relative_time_at(at, self.now)),
            None => "-".to_string(),
        }
    }
}

fn number(value: Option<u64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

impl TableOutput for LimitsReport {
    fn print_table(&self, color: bool) {
        if self.rows.is_empty() {
            println!("No rate limit information returned.");
            return;
        }

        let rows: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| {
                vec![
                    row.resource.clone(),
                    row.endpoint.clone(),
                    number(row.limit),
                    number(row.remaining),
                    self.reset_text(row.reset),
                ]
            })
            .collect();

        TableBuilder::new()
            .color(color)
            .headers(["RESOURCE", "ENDPOINT", "LIMIT", "REMAINING", "RESETS"])
            .rows(rows)
            .print();

        let exhausted = self.rows.iter().filter(|r| r.remaining == Some(0)).count();
        if exhausted > 0 {
            println!();
            print_field("Exhausted", &exhausted.to_string(), color);
        }
    }

    fn print_markdown(&self) {
        println!("| Resource | Endpoint | Limit | Remaining | Resets |");
        println!("|---|---|---|---|---|");
        for row in &self.rows {
            println!(
                "| {} | {} | {} | {} | {} |",
                row.resource,
                row.endpoint,
                number(row.limit),
                number(row.remaining),
                self.reset_text(row.reset)
            );
        }
    }
}

impl LimitsCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = connect()?;
        let resources = (!self.resources.is_empty()).then(|| self.resources.join(","));

        let status = client
            .rate_limit_status(resources.as_deref())
            .await
            .context("Failed to fetch rate limit status")?;
        let now = chrono::Utc::now().timestamp();

        let writer = OutputWriter::new(global.format());
        if self.frequency {
            let seconds = hit_frequency(&status, now);
            if writer.is_json() {
                return crate::output::write_json(&serde_json::json!({ "seconds": seconds }));
            }
            println!("{}", seconds);
            return Ok(());
        }

        writer.write(&LimitsReport::from_value(&status, now))
    }
}
