//
//  twitter-rest
//  api/models/user.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User profile records.

use serde::{Deserialize, Serialize};

use super::lenient;
use super::Status;

/// A Twitter user profile.
///
/// Boolean-like fields are tri-state: `Some(true)`, `Some(false)` or absent.
/// Counts are non-negative integers or absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "lenient::unsigned")]
    pub id: Option<u64>,

    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,

    #[serde(deserialize_with = "lenient::text")]
    pub screen_name: Option<String>,

    #[serde(deserialize_with = "lenient::text")]
    pub location: Option<String>,

    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,

    #[serde(deserialize_with = "lenient::text")]
    pub profile_image_url: Option<String>,

    #[serde(deserialize_with = "lenient::text")]
    pub profile_image_url_https: Option<String>,

    #[serde(deserialize_with = "lenient::flag")]
    pub profile_background_tile: Option<bool>,

    #[serde(deserialize_with = "lenient::text")]
    pub profile_background_image_url: Option<String>,

    #[serde(deserialize_with = "lenient::text")]
    pub profile_sidebar_fill_color: Option<String>,

    #[serde(deserialize_with = "lenient::text")]
    pub profile_background_color: Option<String>,

    #[serde(deserialize_with = "lenient::text")]
    pub profile_link_color: Option<String>,

    #[serde(deserialize_with = "lenient::text")]
    pub profile_text_color: Option<String>,

    #[serde(deserialize_with = "lenient::flag")]
    pub protected: Option<bool>,

    #[serde(deserialize_with = "lenient::flag")]
    pub verified: Option<bool>,

    #[serde(deserialize_with = "lenient::flag")]
    pub geo_enabled: Option<bool>,

    #[serde(deserialize_with = "lenient::flag")]
    pub notifications: Option<bool>,

    #[serde(deserialize_with = "lenient::flag")]
    pub contributors_enabled: Option<bool>,

    /// Offset from UTC in seconds; may be negative.
    #[serde(deserialize_with = "lenient::signed")]
    pub utc_offset: Option<i64>,

    #[serde(deserialize_with = "lenient::text")]
    pub time_zone: Option<String>,

    #[serde(deserialize_with = "lenient::unsigned")]
    pub followers_count: Option<u64>,

    #[serde(deserialize_with = "lenient::unsigned")]
    pub friends_count: Option<u64>,

    #[serde(deserialize_with = "lenient::unsigned")]
    pub statuses_count: Option<u64>,

    #[serde(deserialize_with = "lenient::unsigned")]
    pub favourites_count: Option<u64>,

    #[serde(deserialize_with = "lenient::unsigned")]
    pub listed_count: Option<u64>,

    #[serde(deserialize_with = "lenient::text")]
    pub url: Option<String>,

    #[serde(deserialize_with = "lenient::text")]
    pub lang: Option<String>,

    #[serde(deserialize_with = "lenient::text")]
    pub created_at: Option<String>,

    /// The user's most recent status, when the API embeds it.
    #[serde(deserialize_with = "lenient::boxed")]
    pub status: Option<Box<Status>>,
}

impl User {
    /// The profile image URL, preferring the HTTPS variant.
    pub fn profile_image(&self) -> Option<&str> {
        self.profile_image_url_https
            .as_deref()
            .or(self.profile_image_url.as_deref())
    }

    /// `@screen_name`, or the numeric id when the name is unknown.
    pub fn handle(&self) -> String {
        match (&self.screen_name, self.id) {
            (Some(name), _) => format!("@{name}"),
            (None, Some(id)) => id.to_string(),
            (None, None) => "-".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Record;
    use serde_json::json;

    #[test]
    fn test_full_profile() {
        let user = User::from_value(json!({
            "id": 718443,
            "name": "Kesuke Miyagi",
            "screen_name": "kesuke",
            "protected": false,
            "verified": "true",
            "utc_offset": -28800,
            "followers_count": "150",
            "friends_count": null,
            "profile_image_url": "http://a0.twimg.com/p.png",
            "profile_image_url_https": "https://si0.twimg.com/p.png",
            "status": {"id": 99, "text": "latest"}
        }));

        assert_eq!(user.id, Some(718443));
        assert_eq!(user.protected, Some(false));
        assert_eq!(user.verified, Some(true));
        assert_eq!(user.geo_enabled, None);
        assert_eq!(user.utc_offset, Some(-28800));
        assert_eq!(user.followers_count, Some(150));
        assert_eq!(user.friends_count, None);
        assert_eq!(user.profile_image(), Some("https://si0.twimg.com/p.png"));
        assert_eq!(user.status.as_ref().and_then(|s| s.id), Some(99));
        assert_eq!(user.handle(), "@kesuke");
    }

    #[test]
    fn test_round_trip_with_embedded_status() {
        let user = User {
            id: Some(1),
            screen_name: Some("jack".to_string()),
            notifications: Some(false),
            listed_count: Some(0),
            status: Some(Box::new(Status {
                id: Some(20),
                text: Some("just setting up my twttr".to_string()),
                ..Default::default()
            })),
            ..Default::default()
        };
        assert_eq!(User::from_value(user.to_value()), user);
    }

    #[test]
    fn test_equality_is_field_wise() {
        let a = User { id: Some(1), lang: Some("en".into()), ..Default::default() };
        let b = User { id: Some(1), lang: Some("fr".into()), ..Default::default() };
        assert_ne!(a, b);
        assert!(a.is_equal(&a.clone()));
    }

    #[test]
    fn test_negative_count_is_dropped() {
        let user = User::from_value(json!({"statuses_count": -1}));
        assert_eq!(user.statuses_count, None);
    }
}
