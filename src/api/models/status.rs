//
//  twitter-rest
//  api/models/status.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Status (tweet) records.
//!
//! A [`Status`] embeds its author as a [`User`] value, and a user may embed
//! its most recent status in turn. The nesting is shallow in practice, but
//! nothing here relies on that.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::lenient;
use super::{HashTag, Url, User};

/// A single post.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use twitter_rest::api::models::{Record, Status};
///
/// let status = Status::from_value(json!({
///     "id": 1,
///     "created_at": "Sun Feb 23 11:32:39 +0000 2014",
///     "text": "#rust is nice",
///     "entities": {"hashtags": [{"text": "rust"}], "urls": []}
/// }));
///
/// assert_eq!(status.created_at_in_seconds(), Some(1393155159));
/// assert_eq!(status.hashtags()[0].text.as_deref(), Some("rust"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Status {
    #[serde(deserialize_with = "lenient::unsigned")]
    pub id: Option<u64>,

    /// Wire-format creation date, e.g. `Sun Feb 23 11:32:39 +0000 2014`.
    #[serde(deserialize_with = "lenient::text")]
    pub created_at: Option<String>,

    #[serde(deserialize_with = "lenient::text")]
    pub text: Option<String>,

    #[serde(deserialize_with = "lenient::text")]
    pub location: Option<String>,

    #[serde(deserialize_with = "lenient::flag")]
    pub favorited: Option<bool>,

    #[serde(deserialize_with = "lenient::unsigned")]
    pub favorite_count: Option<u64>,

    #[serde(deserialize_with = "lenient::flag")]
    pub retweeted: Option<bool>,

    #[serde(deserialize_with = "lenient::unsigned")]
    pub retweet_count: Option<u64>,

    #[serde(deserialize_with = "lenient::flag")]
    pub truncated: Option<bool>,

    #[serde(deserialize_with = "lenient::unsigned")]
    pub in_reply_to_status_id: Option<u64>,

    #[serde(deserialize_with = "lenient::unsigned")]
    pub in_reply_to_user_id: Option<u64>,

    #[serde(deserialize_with = "lenient::text")]
    pub in_reply_to_screen_name: Option<String>,

    #[serde(deserialize_with = "lenient::text")]
    pub source: Option<String>,

    #[serde(deserialize_with = "lenient::text")]
    pub lang: Option<String>,

    #[serde(deserialize_with = "lenient::object")]
    pub user: Option<User>,

    #[serde(deserialize_with = "lenient::object")]
    pub entities: Option<Entities>,

    /// Reference time (epoch seconds) for [`relative_created_at`](Self::relative_created_at).
    /// Falls back to the system clock when unset.
    #[serde(deserialize_with = "lenient::signed")]
    pub now: Option<i64>,
}

impl Status {
    /// `created_at` as epoch seconds.
    pub fn created_at_in_seconds(&self) -> Option<i64> {
        self.created_at.as_deref().and_then(lenient::parse_timestamp)
    }

    /// Human-readable age, e.g. `"5 minutes ago"`.
    pub fn relative_created_at(&self) -> Option<String> {
        let created = self.created_at_in_seconds()?;
        let now = self.now.unwrap_or_else(|| Utc::now().timestamp());
        Some(crate::util::format_relative_time_at(created, now))
    }

    pub fn hashtags(&self) -> &[HashTag] {
        self.entities.as_ref().map_or(&[], |e| e.hashtags.as_slice())
    }

    pub fn urls(&self) -> &[Url] {
        self.entities.as_ref().map_or(&[], |e| e.urls.as_slice())
    }
}

/// Entities Twitter extracted from a status's text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entities {
    #[serde(deserialize_with = "lenient::records", skip_serializing_if = "Vec::is_empty")]
    pub hashtags: Vec<HashTag>,

    #[serde(deserialize_with = "lenient::records", skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<Url>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Record;
    use serde_json::json;

    fn sample() -> Status {
        Status {
            id: Some(4391023),
            created_at: Some("Fri Jan 26 23:17:14 +0000 2007".to_string()),
            text: Some("A l'écoute de France Info".to_string()),
            favorited: Some(false),
            favorite_count: Some(0),
            user: Some(User {
                id: Some(718443),
                name: Some("Kesuke Miyagi".to_string()),
                screen_name: Some("kesuke".to_string()),
                ..Default::default()
            }),
            entities: Some(Entities {
                hashtags: vec![HashTag::new("france")],
                urls: vec![],
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_round_trip() {
        let status = sample();
        assert_eq!(Status::from_value(status.to_value()), status);
        assert!(status.is_equal(&Status::from_value(status.to_value())));
    }

    #[test]
    fn test_to_value_is_sparse() {
        let value = sample().to_value();
        assert!(value.get("location").is_none());
        assert!(value.get("now").is_none());
        assert_eq!(value["favorited"], json!(false));
        assert_eq!(value["user"]["screen_name"], json!("kesuke"));
        assert!(value["entities"].get("urls").is_none());
    }

    #[test]
    fn test_from_non_object_is_default() {
        assert_eq!(Status::from_value(json!([1, 2])), Status::default());
        assert_eq!(Status::from_value(json!("nope")), Status::default());
    }

    #[test]
    fn test_user_id_from_string() {
        let status = Status::from_value(json!({"id": 1, "user": {"id": "718443"}}));
        assert_eq!(status.user.and_then(|u| u.id), Some(718443));
    }

    #[test]
    fn test_mistyped_user_is_dropped() {
        let status = Status::from_value(json!({"id": 1, "user": 718443}));
        assert_eq!(status.id, Some(1));
        assert!(status.user.is_none());
    }

    #[test]
    fn test_different_ids_are_not_equal() {
        let a = sample();
        let mut b = sample();
        b.id = Some(1);
        assert_ne!(a, b);
    }

    #[test]
    fn test_relative_created_at_uses_now() {
        let mut status = sample();
        let created = status.created_at_in_seconds().unwrap();
        status.now = Some(created + 5 * 60);
        assert_eq!(status.relative_created_at().as_deref(), Some("5 minutes ago"));
    }

    #[test]
    fn test_display_is_json() {
        let text = Status { id: Some(3), ..Default::default() }.to_string();
        assert_eq!(text, r#"{"id":3}"#);
    }
}
