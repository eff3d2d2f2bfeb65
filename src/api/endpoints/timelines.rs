//
//  twitter-rest
//  api/endpoints/timelines.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Timelines: home, user, mentions, and a user's favorites.
//!
//! All of these cap `count` at [`MAX_TIMELINE_COUNT`].

use super::{check_count, MAX_TIMELINE_COUNT};
use crate::api::client::TwitterClient;
use crate::api::common::Result;
use crate::api::models::{Record, Status};
use crate::api::params::{Params, UserRef};

/// Paging and trimming options shared by the authenticated timelines.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineQuery {
    pub count: Option<u32>,
    pub since_id: Option<u64>,
    pub max_id: Option<u64>,
    pub trim_user: bool,
    pub exclude_replies: bool,
    pub contributor_details: bool,
    pub include_entities: bool,
}

impl Default for TimelineQuery {
    fn default() -> Self {
        Self {
            count: None,
            since_id: None,
            max_id: None,
            trim_user: false,
            exclude_replies: false,
            contributor_details: false,
            include_entities: true,
        }
    }
}

/// Parameters for [`TwitterClient::user_timeline`].
///
/// With no `user`, Twitter returns the authenticating user's timeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserTimelineQuery {
    pub user: Option<UserRef>,
    pub count: Option<u32>,
    pub since_id: Option<u64>,
    pub max_id: Option<u64>,
    pub include_rts: bool,
    pub trim_user: bool,
    pub exclude_replies: bool,
}

/// Parameters for [`TwitterClient::mentions`].
#[derive(Debug, Clone, PartialEq)]
pub struct MentionsQuery {
    pub count: Option<u32>,
    pub since_id: Option<u64>,
    pub max_id: Option<u64>,
    pub trim_user: bool,
    pub contributor_details: bool,
    pub include_entities: bool,
}

impl Default for MentionsQuery {
    fn default() -> Self {
        Self {
            count: None,
            since_id: None,
            max_id: None,
            trim_user: false,
            contributor_details: false,
            include_entities: true,
        }
    }
}

/// Parameters for [`TwitterClient::favorites`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FavoritesQuery {
    pub user: Option<UserRef>,
    pub count: Option<u32>,
    pub since_id: Option<u64>,
    pub max_id: Option<u64>,
    pub include_entities: bool,
}

fn paging(params: &mut Params, count: Option<u32>, since_id: Option<u64>, max_id: Option<u64>) {
    params
        .push_opt("count", count)
        .push_opt("since_id", since_id)
        .push_opt("max_id", max_id);
}

impl TwitterClient {
    /// Recent statuses from the authenticating user and the accounts they follow.
    pub async fn home_timeline(&self, query: &TimelineQuery) -> Result<Vec<Status>> {
        check_count(query.count, MAX_TIMELINE_COUNT)?;
        self.require_auth()?;

        let mut params = Params::new();
        paging(&mut params, query.count, query.since_id, query.max_id);
        if query.trim_user {
            params.push("trim_user", 1);
        }
        if query.exclude_replies {
            params.push("exclude_replies", 1);
        }
        if query.contributor_details {
            params.push("contributor_details", 1);
        }
        if !query.include_entities {
            params.push_flag("include_entities", false);
        }

        let data = self.get("statuses/home_timeline.json", params).await?;
        Ok(Status::list_from_value(data))
    }

    /// Public statuses posted by one user.
    pub async fn user_timeline(&self, query: &UserTimelineQuery) -> Result<Vec<Status>> {
        check_count(query.count, MAX_TIMELINE_COUNT)?;

        let mut params = Params::new();
        if let Some(user) = &query.user {
            user.apply(&mut params);
        }
        paging(&mut params, query.count, query.since_id, query.max_id);
        if query.include_rts {
            params.push("include_rts", 1);
        }
        if query.trim_user {
            params.push("trim_user", 1);
        }
        if query.exclude_replies {
            params.push("exclude_replies", 1);
        }

        let data = self.get("statuses/user_timeline.json", params).await?;
        Ok(Status::list_from_value(data))
    }

    /// The authenticating user's own retweets.
    pub async fn user_retweets(&self, query: &TimelineQuery) -> Result<Vec<Status>> {
        self.user_timeline(&UserTimelineQuery {
            user: None,
            count: query.count,
            since_id: query.since_id,
            max_id: query.max_id,
            include_rts: true,
            trim_user: query.trim_user,
            exclude_replies: true,
        })
        .await
    }

    /// The authenticating user's recent replies.
    pub async fn replies(&self, query: &TimelineQuery) -> Result<Vec<Status>> {
        self.user_timeline(&UserTimelineQuery {
            user: None,
            count: query.count,
            since_id: query.since_id,
            max_id: query.max_id,
            include_rts: false,
            trim_user: query.trim_user,
            exclude_replies: false,
        })
        .await
    }

    /// Statuses mentioning the authenticating user.
    pub async fn mentions(&self, query: &MentionsQuery) -> Result<Vec<Status>> {
        check_count(query.count, MAX_TIMELINE_COUNT)?;
        self.require_auth()?;

        let mut params = Params::new();
        paging(&mut params, query.count, query.since_id, query.max_id);
        if query.trim_user {
            params.push("trim_user", 1);
        }
        if query.contributor_details {
            params.push_flag("contributor_details", true);
        }
        if !query.include_entities {
            params.push_flag("include_entities", false);
        }

        let data = self.get("statuses/mentions_timeline.json", params).await?;
        Ok(Status::list_from_value(data))
    }

    /// Statuses a user has favorited. Defaults to the authenticating user.
    pub async fn favorites(&self, query: &FavoritesQuery) -> Result<Vec<Status>> {
        check_count(query.count, MAX_TIMELINE_COUNT)?;

        let mut params = Params::new();
        if let Some(user) = &query.user {
            user.apply(&mut params);
        }
        paging(&mut params, query.count, query.since_id, query.max_id);
        if query.include_entities {
            params.push_flag("include_entities", true);
        }

        let data = self.get("favorites/list.json", params).await?;
        Ok(Status::list_from_value(data))
    }
}
