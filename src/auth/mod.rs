//
//  twitter-rest
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Twitter's v1.1 API authenticates user-context calls with OAuth 1.0a. A
//! client needs four values: the application's consumer key pair and the
//! user's access token pair.
//!
//! ## Module Structure
//!
//! - [`Credentials`]: the four OAuth values, any of which may be unset
//! - [`RequestSigner`]: produces the `Authorization` header for a request
//! - [`OAuthSigner`]: HMAC-SHA1 implementation of [`RequestSigner`]
//! - [`KeyringStore`]: keeps credentials in the system keyring for the CLI
//!
//! ## Authentication State
//!
//! A client is authenticated exactly when all four credential fields are
//! set. Partial credentials count as unauthenticated.
//!
//! ## Example
//!
//! ```rust
//! use twitter_rest::auth::Credentials;
//!
//! let mut credentials = Credentials::new("ck", "cs", "at", "ats");
//! assert!(credentials.is_complete());
//!
//! credentials.access_token_secret = None;
//! assert!(!credentials.is_complete());
//! ```

mod keyring;
mod oauth;

pub use keyring::*;
pub use oauth::*;

use serde::{Deserialize, Serialize};

use crate::api::common::Result;

/// Environment variables that override stored credentials.
pub const ENV_CONSUMER_KEY: &str = "TW_CONSUMER_KEY";
pub const ENV_CONSUMER_SECRET: &str = "TW_CONSUMER_SECRET";
pub const ENV_ACCESS_TOKEN: &str = "TW_ACCESS_TOKEN";
pub const ENV_ACCESS_TOKEN_SECRET: &str = "TW_ACCESS_TOKEN_SECRET";

/// OAuth 1.0a consumer and access-token credentials.
///
/// `Debug` output masks every secret.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumer_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumer_secret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token_secret: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &mask(&self.consumer_key))
            .field("consumer_secret", &mask(&self.consumer_secret))
            .field("access_token_key", &mask(&self.access_token_key))
            .field("access_token_secret", &mask(&self.access_token_secret))
            .finish()
    }
}

fn mask(value: &Option<String>) -> &'static str {
    if value.is_some() {
        "<set>"
    } else {
        "<unset>"
    }
}

impl Credentials {
    pub fn new(
        consumer_key: &str,
        consumer_secret: &str,
        access_token_key: &str,
        access_token_secret: &str,
    ) -> Self {
        Self {
            consumer_key: Some(consumer_key.to_string()),
            consumer_secret: Some(consumer_secret.to_string()),
            access_token_key: Some(access_token_key.to_string()),
            access_token_secret: Some(access_token_secret.to_string()),
        }
    }

    /// `true` when all four values are present.
    pub fn is_complete(&self) -> bool {
        self.consumer_key.is_some()
            && self.consumer_secret.is_some()
            && self.access_token_key.is_some()
            && self.access_token_secret.is_some()
    }

    /// Overrides fields from the `TW_*` environment variables.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Overrides fields from any variable lookup. Empty values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(v) = read(ENV_CONSUMER_KEY) {
            self.consumer_key = Some(v);
        }
        if let Some(v) = read(ENV_CONSUMER_SECRET) {
            self.consumer_secret = Some(v);
        }
        if let Some(v) = read(ENV_ACCESS_TOKEN) {
            self.access_token_key = Some(v);
        }
        if let Some(v) = read(ENV_ACCESS_TOKEN_SECRET) {
            self.access_token_secret = Some(v);
        }
        self
    }
}

/// Produces the `Authorization` header value for a request.
///
/// `params` are the query parameters for GET requests or the form fields for
/// url-encoded POST requests; multipart fields are never signed.
pub trait RequestSigner: Send + Sync {
    fn authorization(&self, method: &str, url: &str, params: &[(String, String)]) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_debug_masks_secrets() {
        let credentials = Credentials::new("ck", "super-secret", "at", "ats");
        let text = format!("{credentials:?}");
        assert!(!text.contains("super-secret"));
        assert!(text.contains("<set>"));
        assert!(format!("{:?}", Credentials::default()).contains("<unset>"));
    }

    #[test]
    fn test_overrides_replace_only_present_values() {
        let vars: HashMap<&str, &str> = [
            (ENV_ACCESS_TOKEN, "env-token"),
            (ENV_ACCESS_TOKEN_SECRET, ""),
        ]
        .into_iter()
        .collect();

        let credentials = Credentials::new("ck", "cs", "at", "ats")
            .with_overrides(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(credentials.access_token_key.as_deref(), Some("env-token"));
        assert_eq!(credentials.access_token_secret.as_deref(), Some("ats"));
        assert_eq!(credentials.consumer_key.as_deref(), Some("ck"));
    }

    #[test]
    fn test_overrides_can_complete_credentials() {
        let credentials = Credentials::default().with_overrides(|name| Some(format!("{name}-value")));
        assert!(credentials.is_complete());
    }

    #[test]
    fn test_json_round_trip_skips_unset() {
        let credentials = Credentials {
            consumer_key: Some("ck".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&credentials).unwrap();
        assert_eq!(json, r#"{"consumer_key":"ck"}"#);
        let back: Credentials = serde_json::from_str(&json).unwrap();
        assert_eq!(back, credentials);
    }
}
