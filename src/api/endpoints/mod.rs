//
//  twitter-rest
//  api/endpoints/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Endpoint methods on [`TwitterClient`](crate::api::TwitterClient).
//!
//! Each file adds an `impl TwitterClient` block for one resource family and
//! defines the query structs its methods take. Every method:
//!
//! 1. Validates its arguments and raises [`InvalidArgument`](crate::api::TwitterError::InvalidArgument)
//! 2. Raises [`AuthenticationRequired`](crate::api::TwitterError::AuthenticationRequired)
//!    when it needs credentials the client does not hold
//! 3. Only then sends a request
//!
//! | File | Endpoints |
//! |------|-----------|
//! | [`search`] | `search/tweets`, `users/search` |
//! | [`trends`] | `trends/place` |
//! | [`timelines`] | home, user and mentions timelines, favorites list |
//! | [`statuses`] | show, update, destroy, retweet, media upload |
//! | [`users`] | friends/followers lists and ids, lookup, show |
//! | [`friendships`] | follow and unfollow |
//! | [`direct_messages`] | list, sent, new, destroy |
//! | [`favorites`] | create and destroy |
//! | [`lists`] | list and subscription management |
//! | [`account`] | credential check, rate limits |

pub mod account;
pub mod direct_messages;
pub mod favorites;
pub mod friendships;
pub mod lists;
pub mod search;
pub mod statuses;
pub mod timelines;
pub mod trends;
pub mod users;

pub use direct_messages::{DirectMessagesQuery, SentDirectMessagesQuery};
pub use search::{Geocode, SearchQuery, UsersSearchQuery, RESULT_TYPES};
pub use statuses::{RetweetsOfMeQuery, StatusQuery, UpdateOptions, CHARACTER_LIMIT};
pub use timelines::{FavoritesQuery, MentionsQuery, TimelineQuery, UserTimelineQuery};
pub use users::{FriendsQuery, IdsQuery, LookupQuery};

use crate::api::common::{Result, TwitterError};

/// Largest `count` the timeline endpoints accept.
pub const MAX_TIMELINE_COUNT: u32 = 200;

/// Largest `count` the retweet endpoints accept.
pub const MAX_RETWEETS_COUNT: u32 = 100;

pub(crate) fn check_count(count: Option<u32>, max: u32) -> Result<()> {
    match count {
        Some(count) if count > max => Err(TwitterError::invalid(format!(
            "'count' may not be greater than {max}"
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_count() {
        assert!(check_count(None, 200).is_ok());
        assert!(check_count(Some(200), 200).is_ok());
        let err = check_count(Some(201), 200).unwrap_err();
        assert_eq!(err.to_string(), "Invalid argument: 'count' may not be greater than 200");
    }
}
