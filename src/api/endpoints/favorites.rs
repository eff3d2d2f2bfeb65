//
//  twitter-rest
//  api/endpoints/favorites.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Favoriting and unfavoriting statuses.
//!
//! Listing a user's favorites lives with the other timelines.

use crate::api::client::TwitterClient;
use crate::api::common::Result;
use crate::api::models::{Record, Status};
use crate::api::params::Params;

impl TwitterClient {
    /// Favorites a status.
    pub async fn create_favorite(&self, id: u64, include_entities: bool) -> Result<Status> {
        self.favorite("favorites/create.json", id, include_entities)
            .await
    }

    /// Removes a status from the authenticating user's favorites.
    pub async fn destroy_favorite(&self, id: u64, include_entities: bool) -> Result<Status> {
        self.favorite("favorites/destroy.json", id, include_entities)
            .await
    }

    async fn favorite(&self, path: &str, id: u64, include_entities: bool) -> Result<Status> {
        self.require_auth()?;

        let mut params = Params::new();
        params.push("id", id);
        if !include_entities {
            params.push_flag("include_entities", false);
        }

        let data = self.post(path, params).await?;
        Ok(Status::from_value(data))
    }
}
