//
//  twitter-rest
//  api/models/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Twitter API record types.
//!
//! This module provides plain data records for the resources the client
//! returns. Every field is optional: records are built from whatever JSON the
//! API sends, and missing or mistyped fields become `None` rather than errors.
//!
//! # Module Organization
//!
//! - [`status`] - Statuses (tweets) and their entities
//! - [`user`] - User profiles
//! - [`direct_message`] - Direct messages
//! - [`trend`] - Trending topics
//! - [`url`] / [`hashtag`] - Status entities
//! - [`list`] - Lists and their owners
//! - [`media`] - Uploaded media handles
//! - [`lenient`] - Field coercion helpers used by all of the above
//!
//! # Ids
//!
//! All ids, including cross references such as `Status::user.id` or
//! `DirectMessage::sender_id`, are stored as `u64`. Ids that arrive as numeric
//! strings are parsed.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use twitter_rest::api::models::{Record, Status};
//!
//! let status = Status::from_value(json!({
//!     "id": "436918574582439936",
//!     "text": "hello",
//!     "user": {"id": 12, "screen_name": "jack"},
//!     "unknown_field": [1, 2, 3]
//! }));
//!
//! assert_eq!(status.id, Some(436918574582439936));
//! assert_eq!(status.user.as_ref().and_then(|u| u.id), Some(12));
//! assert_eq!(Status::from_value(status.to_value()), status);
//! ```

pub mod direct_message;
pub mod hashtag;
pub mod lenient;
pub mod list;
pub mod media;
pub mod status;
pub mod trend;
pub mod url;
pub mod user;

pub use direct_message::DirectMessage;
pub use hashtag::HashTag;
pub use list::{ListMode, ListOwner, ListResource};
pub use media::{Media, MediaImage};
pub use status::{Entities, Status};
pub use trend::Trend;
pub use url::Url;
pub use user::User;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::common::Result;

/// Behaviour shared by every record type.
///
/// # Laws
///
/// - [`from_value`](Self::from_value) never fails; non-object input yields
///   the default record
/// - [`to_value`](Self::to_value) is sparse: `None` fields and empty strings
///   are omitted
/// - `R::from_value(r.to_value()) == r` whenever `r` holds no empty strings
pub trait Record: Serialize + DeserializeOwned + Default + PartialEq {
    /// Builds a record from a decoded JSON value.
    fn from_value(value: Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value).unwrap_or_default()
    }

    /// Builds one record per object in a JSON array; anything else is empty.
    fn list_from_value(value: Value) -> Vec<Self> {
        match value {
            Value::Array(items) => items.into_iter().map(Self::from_value).collect(),
            _ => Vec::new(),
        }
    }

    /// Sparse JSON representation.
    fn to_value(&self) -> Value {
        serde_json::to_value(self)
            .map(lenient::sparse)
            .unwrap_or_else(|_| Value::Object(Default::default()))
    }

    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_value())?)
    }

    /// Field-wise equality.
    fn is_equal(&self, other: &Self) -> bool {
        self == other
    }
}

macro_rules! record {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Record for $ty {}

            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", self.to_value())
                }
            }
        )+
    };
}

record!(Status, Entities, User, DirectMessage, Trend, Url, HashTag, ListResource, Media);
