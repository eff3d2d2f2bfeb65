//
//  twitter-rest
//  api/models/list.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! List records.
//!
//! A list's `user` is usually the full owner profile, but some payloads only
//! reference the owner by id or screen name. [`ListOwner`] keeps whichever
//! form was sent.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::lenient;
use super::{Record, User};
use crate::api::common::TwitterError;

/// List visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListMode {
    Public,
    Private,
}

impl ListMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

impl fmt::Display for ListMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListMode {
    type Err = TwitterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "public" => Ok(Self::Public),
            "private" => Ok(Self::Private),
            other => Err(TwitterError::invalid(format!(
                "'mode' must be public or private, got '{other}'"
            ))),
        }
    }
}

/// The owner of a list, as embedded in the list payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ListOwner {
    User(User),
    Id(u64),
    ScreenName(String),
}

impl ListOwner {
    pub fn id(&self) -> Option<u64> {
        match self {
            Self::User(user) => user.id,
            Self::Id(id) => Some(*id),
            Self::ScreenName(_) => None,
        }
    }

    pub fn screen_name(&self) -> Option<&str> {
        match self {
            Self::User(user) => user.screen_name.as_deref(),
            Self::ScreenName(name) => Some(name),
            Self::Id(_) => None,
        }
    }
}

/// A curated list of users.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListResource {
    #[serde(deserialize_with = "lenient::unsigned")]
    pub id: Option<u64>,

    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,

    #[serde(deserialize_with = "lenient::text")]
    pub slug: Option<String>,

    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,

    #[serde(deserialize_with = "lenient::text")]
    pub full_name: Option<String>,

    #[serde(deserialize_with = "list_mode")]
    pub mode: Option<ListMode>,

    #[serde(deserialize_with = "lenient::text")]
    pub uri: Option<String>,

    #[serde(deserialize_with = "lenient::unsigned")]
    pub member_count: Option<u64>,

    #[serde(deserialize_with = "lenient::unsigned")]
    pub subscriber_count: Option<u64>,

    #[serde(deserialize_with = "lenient::flag")]
    pub following: Option<bool>,

    #[serde(deserialize_with = "list_owner")]
    pub user: Option<ListOwner>,
}

fn list_mode<'de, D>(deserializer: D) -> Result<Option<ListMode>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s.parse().ok(),
        _ => None,
    })
}

fn list_owner<'de, D>(deserializer: D) -> Result<Option<ListOwner>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => Some(ListOwner::User(User::from_value(value))),
        value @ Value::Number(_) => lenient::as_unsigned(&value).map(ListOwner::Id),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => match s.parse::<u64>() {
            Ok(id) => Some(ListOwner::Id(id)),
            Err(_) => Some(ListOwner::ScreenName(s)),
        },
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_with_full_owner() {
        let list = ListResource::from_value(json!({
            "id": 574,
            "name": "Team",
            "slug": "team",
            "full_name": "@twitter/team",
            "mode": "public",
            "member_count": 60,
            "following": false,
            "user": {"id": 783214, "screen_name": "twitter"}
        }));

        assert_eq!(list.mode, Some(ListMode::Public));
        assert_eq!(list.user.as_ref().and_then(ListOwner::id), Some(783214));
        assert_eq!(list.user.as_ref().and_then(ListOwner::screen_name), Some("twitter"));
        assert_eq!(ListResource::from_value(list.to_value()), list);
    }

    #[test]
    fn test_list_with_raw_owner_reference() {
        let by_id = ListResource::from_value(json!({"user": "783214"}));
        assert_eq!(by_id.user, Some(ListOwner::Id(783214)));

        let by_name = ListResource::from_value(json!({"user": "twitter"}));
        assert_eq!(by_name.user, Some(ListOwner::ScreenName("twitter".into())));
        assert_eq!(ListResource::from_value(by_name.to_value()), by_name);
    }

    #[test]
    fn test_unknown_mode_is_none() {
        let list = ListResource::from_value(json!({"mode": "secret"}));
        assert_eq!(list.mode, None);
        assert!("secret".parse::<ListMode>().is_err());
        assert_eq!("Private".parse::<ListMode>().unwrap(), ListMode::Private);
    }
}
