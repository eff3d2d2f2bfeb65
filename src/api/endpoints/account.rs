//
//  twitter-rest
//  api/endpoints/account.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Account checks and rate limits.

use serde_json::Value;

use crate::api::client::TwitterClient;
use crate::api::common::Result;
use crate::api::models::lenient::{as_epoch, as_unsigned};
use crate::api::models::{Record, User};
use crate::api::params::Params;

/// Interval returned when the rate limit status carries no reset time.
pub const DEFAULT_HIT_FREQUENCY_SECS: u64 = 60;

impl TwitterClient {
    /// The authenticating user's profile.
    ///
    /// Returns `Ok(None)` when Twitter rejects the credentials with a 401.
    pub async fn verify_credentials(&self) -> Result<Option<User>> {
        self.require_auth()?;

        match self.get("account/verify_credentials.json", Params::new()).await {
            Ok(data) => Ok(Some(User::from_value(data))),
            Err(err) if err.is_unauthorized() => {
                tracing::debug!("Credentials rejected");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Raw rate limit status.
    ///
    /// `resources` is a comma-separated list of resource families, such as
    /// `"statuses,search"`.
    pub async fn rate_limit_status(&self, resources: Option<&str>) -> Result<Value> {
        let mut params = Params::new();
        params.push_opt("resources", resources);

        self.get("application/rate_limit_status.json", params).await
    }

    /// Smallest interval in seconds between requests that stays within the
    /// current rate limit.
    pub async fn maximum_hit_frequency(&self) -> Result<u64> {
        let status = self.rate_limit_status(None).await?;
        Ok(hit_frequency(&status, chrono::Utc::now().timestamp()))
    }
}

/// Spreads the remaining hits over the time left until one hour past
/// `reset_time`.
///
/// Never negative. Without a `reset_time` the answer is
/// [`DEFAULT_HIT_FREQUENCY_SECS`].
pub fn hit_frequency(status: &Value, now: i64) -> u64 {
    let Some(reset) = status.get("reset_time").and_then(as_epoch) else {
        return DEFAULT_HIT_FREQUENCY_SECS;
    };

    let seconds = u64::try_from(reset.saturating_add(3600).saturating_sub(now)).unwrap_or(0);
    match status.get("remaining_hits").and_then(as_unsigned) {
        Some(remaining) if remaining > 0 => seconds / remaining + 1,
        _ => seconds,
    }
}
