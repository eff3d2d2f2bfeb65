//
//  twitter-rest
//  api/models/direct_message.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Direct message records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lenient;

/// A private message between two users.
///
/// `created_at` is stored as epoch seconds. The API sends a wire date
/// (`Sun Feb 23 11:32:39 +0000 2014`); numbers and RFC 3339 strings are
/// accepted as well.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use twitter_rest::api::models::{DirectMessage, Record};
///
/// let dm = DirectMessage::from_value(json!({
///     "id": 3496342,
///     "created_at": "Sun Feb 23 11:32:39 +0000 2014",
///     "sender_id": "718443",
///     "text": "hi"
/// }));
///
/// assert_eq!(dm.created_at, Some(1393155159));
/// assert_eq!(dm.sender_id, Some(718443));
/// assert_eq!(dm.created_at().map(|t| t.to_rfc3339()).as_deref(), Some("2014-02-23T11:32:39+00:00"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectMessage {
    #[serde(deserialize_with = "lenient::unsigned")]
    pub id: Option<u64>,

    #[serde(deserialize_with = "lenient::text")]
    pub text: Option<String>,

    #[serde(deserialize_with = "lenient::epoch")]
    pub created_at: Option<i64>,

    #[serde(deserialize_with = "lenient::unsigned")]
    pub sender_id: Option<u64>,

    #[serde(deserialize_with = "lenient::text")]
    pub sender_screen_name: Option<String>,

    #[serde(deserialize_with = "lenient::unsigned")]
    pub recipient_id: Option<u64>,

    #[serde(deserialize_with = "lenient::text")]
    pub recipient_screen_name: Option<String>,
}

impl DirectMessage {
    /// Creation time as a UTC date.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
            .and_then(|seconds| DateTime::from_timestamp(seconds, 0))
    }

    pub fn set_created_at(&mut self, at: DateTime<Utc>) {
        self.created_at = Some(at.timestamp());
    }

    /// Seconds elapsed between creation and now.
    pub fn created_at_in_seconds(&self) -> Option<i64> {
        self.created_at
            .map(|created| (Utc::now().timestamp() - created).abs())
    }
}
