//
//  twitter-rest
//  api/endpoints/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Users: friend and follower lists, id lists, lookup and show.
//!
//! The list and id endpoints are cursored. Each call follows `next_cursor`
//! until Twitter returns `0` and concatenates every page.

use serde_json::Value;

use crate::api::client::TwitterClient;
use crate::api::common::START_CURSOR;
use crate::api::common::{Result, TwitterError};
use crate::api::models::lenient::as_unsigned;
use crate::api::models::{Record, User};
use crate::api::params::{Params, UserRef};

/// Twitter's "no user matches" error code.
const NO_USER_MATCHES: i64 = 34;

/// Parameters for [`TwitterClient::friends`] and [`TwitterClient::followers`].
///
/// With no `user`, Twitter answers for the authenticating user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FriendsQuery {
    pub user: Option<UserRef>,
    /// First cursor to request; defaults to `-1`.
    pub cursor: Option<i64>,
    pub skip_status: bool,
    pub include_user_entities: bool,
}

/// Parameters for [`TwitterClient::friend_ids`] and [`TwitterClient::follower_ids`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdsQuery {
    pub user: Option<UserRef>,
    pub cursor: Option<i64>,
    pub stringify_ids: bool,
    /// Ids per page, up to 5000.
    pub count: Option<u32>,
}

/// Parameters for [`TwitterClient::users_lookup`].
///
/// Ids of any full records in `users` are looked up along with `user_ids`.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupQuery {
    pub user_ids: Vec<u64>,
    pub screen_names: Vec<String>,
    pub users: Vec<User>,
    pub include_entities: bool,
}

impl Default for LookupQuery {
    fn default() -> Self {
        Self {
            user_ids: Vec::new(),
            screen_names: Vec::new(),
            users: Vec::new(),
            include_entities: true,
        }
    }
}

impl LookupQuery {
    fn is_empty(&self) -> bool {
        self.user_ids.is_empty() && self.screen_names.is_empty() && self.users.is_empty()
    }

    fn ids(&self) -> Vec<String> {
        self.user_ids
            .iter()
            .copied()
            .chain(self.users.iter().filter_map(|user| user.id))
            .map(|id| id.to_string())
            .collect()
    }
}

fn user_from_value(value: &Value) -> Option<User> {
    value.is_object().then(|| User::from_value(value.clone()))
}

impl FriendsQuery {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        if let Some(user) = &self.user {
            user.apply(&mut params);
        }
        if self.skip_status {
            params.push_flag("skip_status", true);
        }
        if self.include_user_entities {
            params.push_flag("include_user_entities", true);
        }
        params
    }
}

impl IdsQuery {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        if let Some(user) = &self.user {
            user.apply(&mut params);
        }
        if self.stringify_ids {
            params.push_flag("stringify_ids", true);
        }
        params.push_opt("count", self.count);
        params
    }
}

impl TwitterClient {
    /// Every account `query.user` follows, across all pages.
    pub async fn friends(&self, query: &FriendsQuery) -> Result<Vec<User>> {
        self.require_auth()?;
        self.get_cursored(
            "friends/list.json",
            query.to_params(),
            query.cursor.unwrap_or(START_CURSOR),
            "users",
            user_from_value,
        )
        .await
    }

    /// Every follower of `query.user`, across all pages.
    pub async fn followers(&self, query: &FriendsQuery) -> Result<Vec<User>> {
        self.require_auth()?;
        self.get_cursored(
            "followers/list.json",
            query.to_params(),
            query.cursor.unwrap_or(START_CURSOR),
            "users",
            user_from_value,
        )
        .await
    }

    /// Ids of every account `query.user` follows.
    pub async fn friend_ids(&self, query: &IdsQuery) -> Result<Vec<u64>> {
        self.require_auth()?;
        self.get_cursored(
            "friends/ids.json",
            query.to_params(),
            query.cursor.unwrap_or(START_CURSOR),
            "ids",
            as_unsigned,
        )
        .await
    }

    /// Ids of every follower of `query.user`.
    pub async fn follower_ids(&self, query: &IdsQuery) -> Result<Vec<u64>> {
        self.require_auth()?;
        self.get_cursored(
            "followers/ids.json",
            query.to_params(),
            query.cursor.unwrap_or(START_CURSOR),
            "ids",
            as_unsigned,
        )
        .await
    }

    /// Full profiles for up to 100 users at once.
    ///
    /// Returns an empty list when none of the requested users exist.
    pub async fn users_lookup(&self, query: &LookupQuery) -> Result<Vec<User>> {
        if query.is_empty() {
            return Err(TwitterError::invalid(
                "Specify at least one of user_id, screen_name, or users",
            ));
        }
        self.require_auth()?;

        let ids = query.ids();
        let mut params = Params::new();
        if !ids.is_empty() {
            params.push("user_id", ids.join(","));
        }
        if !query.screen_names.is_empty() {
            params.push("screen_name", query.screen_names.join(","));
        }
        if !query.include_entities {
            params.push_flag("include_entities", false);
        }

        match self.get("users/lookup.json", params).await {
            Ok(data) => Ok(User::list_from_value(data)),
            Err(err) if err.has_api_code(NO_USER_MATCHES) => {
                tracing::debug!("users/lookup matched nobody");
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }

    /// One user's profile.
    pub async fn user(&self, user: &UserRef, include_entities: bool) -> Result<User> {
        self.require_auth()?;

        let mut params = Params::new();
        user.apply(&mut params);
        if !include_entities {
            params.push_flag("include_entities", false);
        }

        let data = self.get("users/show.json", params).await?;
        Ok(User::from_value(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{anonymous_client, authenticated_client, path, query, MockTransport};

    #[tokio::test]
    async fn test_ids_follow_cursor_until_zero() {
        let mock = MockTransport::new();
        mock.respond(r#"{"ids": [1, 2, 3], "next_cursor": 5, "previous_cursor": 0}"#)
            .respond(r#"{"ids": ["4", 5], "next_cursor": 0, "previous_cursor": -5}"#);
        let client = authenticated_client(&mock);

        let ids = client
            .friend_ids(&IdsQuery {
                user: Some(UserRef::ScreenName("jack".to_string())),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);

        let requests = mock.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(query(&requests[0])["cursor"], "-1");
        assert_eq!(query(&requests[1])["cursor"], "5");
        assert_eq!(query(&requests[1])["screen_name"], "jack");
    }

    #[tokio::test]
    async fn test_follower_ids_path_and_flags() {
        let mock = MockTransport::new();
        mock.respond(r#"{"ids": [], "next_cursor": 0}"#);
        let client = authenticated_client(&mock);

        client
            .follower_ids(&IdsQuery {
                stringify_ids: true,
                count: Some(5000),
                ..Default::default()
            })
            .await
            .unwrap();

        let request = &mock.requests()[0];
        assert_eq!(path(request), "/1.1/followers/ids.json");
        let params = query(request);
        assert_eq!(params["stringify_ids"], "true");
        assert_eq!(params["count"], "5000");
        assert!(!params.contains_key("user_id"));
    }

    #[tokio::test]
    async fn test_friends_collects_users() {
        let mock = MockTransport::new();
        mock.respond(r#"{"users": [{"id": 1, "screen_name": "a"}], "next_cursor": 9}"#)
            .respond(r#"{"users": [{"id": 2, "screen_name": "b"}, 7], "next_cursor": 0}"#);
        let client = authenticated_client(&mock);

        let users = client
            .friends(&FriendsQuery {
                user: Some(UserRef::Id(12)),
                skip_status: true,
                ..Default::default()
            })
            .await
            .unwrap();
        let names: Vec<_> = users.iter().filter_map(|u| u.screen_name.as_deref()).collect();
        assert_eq!(names, vec!["a", "b"]);

        let params = query(&mock.requests()[0]);
        assert_eq!(path(&mock.requests()[0]), "/1.1/friends/list.json");
        assert_eq!(params["user_id"], "12");
        assert_eq!(params["skip_status"], "true");
    }

    #[tokio::test]
    async fn test_followers_path() {
        let mock = MockTransport::new();
        let client = authenticated_client(&mock);

        assert!(client.followers(&FriendsQuery::default()).await.unwrap().is_empty());
        assert_eq!(path(&mock.requests()[0]), "/1.1/followers/list.json");
    }

    #[tokio::test]
    async fn test_cursored_lists_require_auth() {
        let mock = MockTransport::new();
        let client = anonymous_client(&mock);

        let err = client.friend_ids(&IdsQuery::default()).await.unwrap_err();
        assert!(matches!(err, TwitterError::AuthenticationRequired));
        assert!(client.followers(&FriendsQuery::default()).await.is_err());
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_lookup_rejects_empty_selection() {
        let mock = MockTransport::new();
        let client = authenticated_client(&mock);

        let err = client.users_lookup(&LookupQuery::default()).await.unwrap_err();
        assert!(matches!(err, TwitterError::InvalidArgument(_)));
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_lookup_joins_ids_and_names() {
        let mock = MockTransport::new();
        mock.respond(r#"[{"id": 1}, {"id": 2}, {"id": 3}]"#);
        let client = authenticated_client(&mock);

        let users = client
            .users_lookup(&LookupQuery {
                user_ids: vec![1, 2],
                screen_names: vec!["jack".to_string(), "biz".to_string()],
                users: vec![User {
                    id: Some(3),
                    ..Default::default()
                }],
                include_entities: false,
            })
            .await
            .unwrap();
        assert_eq!(users.len(), 3);

        let params = query(&mock.requests()[0]);
        assert_eq!(params["user_id"], "1,2,3");
        assert_eq!(params["screen_name"], "jack,biz");
        assert_eq!(params["include_entities"], "false");
    }

    #[tokio::test]
    async fn test_lookup_no_matches_is_empty() {
        let mock = MockTransport::new();
        mock.fail(
            404,
            r#"{"errors": [{"code": 34, "message": "Sorry, that page does not exist"}]}"#,
        );
        let client = authenticated_client(&mock);

        let users = client
            .users_lookup(&LookupQuery {
                user_ids: vec![1],
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn test_lookup_other_errors_propagate() {
        let mock = MockTransport::new();
        mock.fail(500, "oops");
        let client = authenticated_client(&mock);

        let result = client
            .users_lookup(&LookupQuery {
                user_ids: vec![1],
                ..Default::default()
            })
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_user_show() {
        let mock = MockTransport::new();
        mock.respond(r#"{"id": 12, "screen_name": "jack", "followers_count": "100"}"#);
        let client = authenticated_client(&mock);

        let user = client
            .user(&UserRef::parse("@jack").unwrap(), false)
            .await
            .unwrap();
        assert_eq!(user.followers_count, Some(100));

        let request = &mock.requests()[0];
        assert_eq!(path(request), "/1.1/users/show.json");
        assert_eq!(query(request)["screen_name"], "jack");
        assert_eq!(query(request)["include_entities"], "false");
    }

    #[tokio::test]
    async fn test_user_show_with_entities_keeps_default() {
        let mock = MockTransport::new();
        let client = authenticated_client(&mock);

        client.user(&UserRef::Id(12), true).await.unwrap();

        let params = query(&mock.requests()[0]);
        assert_eq!(params["user_id"], "12");
        assert!(!params.contains_key("include_entities"));
    }
}
