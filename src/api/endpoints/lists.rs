//
//  twitter-rest
//  api/endpoints/lists.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Lists: create, destroy, subscribe and enumerate.
//!
//! A list is addressed either by id or by its owner plus slug
//! (see [`ListRef`]).

use serde_json::Value;

use crate::api::client::TwitterClient;
use crate::api::common::{CursorPage, START_CURSOR};
use crate::api::common::{Result, TwitterError};
use crate::api::models::{ListMode, ListResource, Record};
use crate::api::params::{ListRef, Params, UserRef};

/// Default page size for [`TwitterClient::subscriptions`].
pub const DEFAULT_SUBSCRIPTIONS_COUNT: u32 = 20;

fn list_from_value(value: &Value) -> Option<ListResource> {
    value.is_object().then(|| ListResource::from_value(value.clone()))
}

impl TwitterClient {
    /// Creates a list owned by the authenticating user.
    pub async fn create_list(
        &self,
        name: &str,
        mode: Option<ListMode>,
        description: Option<&str>,
    ) -> Result<ListResource> {
        if name.trim().is_empty() {
            return Err(TwitterError::invalid("'name' must not be empty"));
        }
        self.require_auth()?;

        let mut params = Params::new();
        params
            .push("name", name)
            .push_opt("mode", mode)
            .push_opt("description", description);

        let data = self.post("lists/create.json", params).await?;
        Ok(ListResource::from_value(data))
    }

    /// Deletes a list the authenticating user owns.
    pub async fn destroy_list(&self, list: &ListRef) -> Result<ListResource> {
        self.list_action("lists/destroy.json", list).await
    }

    /// Subscribes the authenticating user to a list.
    pub async fn create_subscription(&self, list: &ListRef) -> Result<ListResource> {
        self.list_action("lists/subscribers/create.json", list).await
    }

    /// Unsubscribes the authenticating user from a list.
    pub async fn destroy_subscription(&self, list: &ListRef) -> Result<ListResource> {
        self.list_action("lists/subscribers/destroy.json", list).await
    }

    async fn list_action(&self, path: &str, list: &ListRef) -> Result<ListResource> {
        self.require_auth()?;

        let mut params = Params::new();
        list.apply(&mut params);

        let data = self.post(path, params).await?;
        Ok(ListResource::from_value(data))
    }

    /// One page of the lists `user` subscribes to.
    ///
    /// Pass the previous page's `next_cursor` as `cursor` to continue;
    /// `None` starts at the first page.
    pub async fn subscriptions(
        &self,
        user: &UserRef,
        count: Option<u32>,
        cursor: Option<i64>,
    ) -> Result<Vec<ListResource>> {
        self.require_auth()?;

        let mut params = Params::new();
        user.apply(&mut params);
        params
            .push("count", count.unwrap_or(DEFAULT_SUBSCRIPTIONS_COUNT))
            .push("cursor", cursor.unwrap_or(START_CURSOR));

        let data = self.get("lists/subscriptions.json", params).await?;
        Ok(CursorPage::from_value(&data, "lists", list_from_value).items)
    }

    /// Every list `user` owns, across all pages.
    pub async fn lists(&self, user: &UserRef, count: Option<u32>) -> Result<Vec<ListResource>> {
        self.require_auth()?;

        let mut params = Params::new();
        user.apply(&mut params);
        params.push_opt("count", count);

        self.get_cursored(
            "lists/ownerships.json",
            params,
            START_CURSOR,
            "lists",
            list_from_value,
        )
        .await
    }
}
