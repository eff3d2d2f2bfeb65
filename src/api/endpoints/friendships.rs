//
//  twitter-rest
//  api/endpoints/friendships.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Following and unfollowing.

use crate::api::client::TwitterClient;
use crate::api::common::Result;
use crate::api::models::{Record, User};
use crate::api::params::{Params, UserRef};

impl TwitterClient {
    /// Follows `user`.
    ///
    /// `follow` turns on device notifications for the new friend.
    pub async fn create_friendship(&self, user: &UserRef, follow: bool) -> Result<User> {
        self.require_auth()?;

        let mut params = Params::new();
        user.apply(&mut params);
        params.push_flag("follow", follow);

        let data = self.post("friendships/create.json", params).await?;
        Ok(User::from_value(data))
    }

    /// Unfollows `user`.
    pub async fn destroy_friendship(&self, user: &UserRef) -> Result<User> {
        self.require_auth()?;

        let mut params = Params::new();
        user.apply(&mut params);

        let data = self.post("friendships/destroy.json", params).await?;
        Ok(User::from_value(data))
    }
}
