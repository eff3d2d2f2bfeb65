//
//  twitter-rest
//  util/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Utility Module
//!
//! Small helpers shared by the records and the CLI.
//!
//! ## Categories
//!
//! - **Time Utilities**: [`format_time`], [`format_relative_time`], [`format_relative_time_at`]
//! - **String Utilities**: [`truncate`], [`single_line`]
//!
//! ## Example
//!
//! ```rust
//! use twitter_rest::util::{format_relative_time_at, truncate};
//!
//! assert_eq!(format_relative_time_at(1_000, 1_300), "5 minutes ago");
//! assert_eq!(truncate("hello world", 8), "hello...");
//! ```

use chrono::{DateTime, Local, Utc};

/// Formats a Unix timestamp as a local `YYYY-MM-DD HH:MM:SS` string.
///
/// Returns "Unknown" for timestamps chrono cannot represent.
pub fn format_time(timestamp: i64) -> String {
    match DateTime::from_timestamp(timestamp, 0) {
        Some(dt) => {
            let local: DateTime<Local> = dt.into();
            local.format("%Y-%m-%d %H:%M:%S").to_string()
        }
        None => "Unknown".to_string(),
    }
}

/// Formats a Unix timestamp relative to the current time.
///
/// See [`format_relative_time_at`] for the wording.
pub fn format_relative_time(timestamp: i64) -> String {
    format_relative_time_at(timestamp, Utc::now().timestamp())
}

/// Formats `timestamp` relative to `now`.
///
/// # Example
///
/// ```rust
/// use twitter_rest::util::format_relative_time_at;
///
/// let now = 1_700_000_000;
/// assert_eq!(format_relative_time_at(now - 30, now), "just now");
/// assert_eq!(format_relative_time_at(now - 60, now), "1 minute ago");
/// assert_eq!(format_relative_time_at(now - 7200, now), "2 hours ago");
/// assert_eq!(format_relative_time_at(now + 10, now), "in the future");
/// ```
///
/// # Notes
///
/// - < 60 seconds: "just now"
/// - < 1 hour: "X minute(s) ago"
/// - < 1 day: "X hour(s) ago"
/// - < 1 week: "X day(s) ago"
/// - < 30 days: "X week(s) ago"
/// - < 1 year: "X month(s) ago"
/// - otherwise: "X year(s) ago"
///
/// Months and years are approximated as 30 and 365 days.
pub fn format_relative_time_at(timestamp: i64, now: i64) -> String {
    let diff = now.saturating_sub(timestamp);
    if diff < 0 {
        return "in the future".to_string();
    }

    let diff = diff as u64;
    let (amount, unit) = if diff < 60 {
        return "just now".to_string();
    } else if diff < 3600 {
        (diff / 60, "minute")
    } else if diff < 86400 {
        (diff / 3600, "hour")
    } else if diff < 604800 {
        (diff / 86400, "day")
    } else if diff < 2592000 {
        (diff / 604800, "week")
    } else if diff < 31536000 {
        (diff / 2592000, "month")
    } else {
        (diff / 31536000, "year")
    };

    format!("{} {}{} ago", amount, unit, if amount == 1 { "" } else { "s" })
}

/// Truncates to at most `max_len` characters, ending with "..." when cut.
///
/// Counts characters, not bytes, so multi-byte text is never split inside a
/// code point.
///
/// ```rust
/// use twitter_rest::util::truncate;
///
/// assert_eq!(truncate("hello", 10), "hello");
/// assert_eq!(truncate("naïve café au lait", 10), "naïve c...");
/// assert_eq!(truncate("short", 3), "sho");
/// ```
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len > 3 {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{head}...")
    } else {
        s.chars().take(max_len).collect()
    }
}

/// Collapses line breaks and runs of whitespace into single spaces.
///
/// Status text can contain newlines, which break table rows.
pub fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
