//
//  twitter-rest
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Cursor Pagination for Twitter API Responses
//!
//! Twitter's list endpoints (`friends/list`, `followers/ids`, `lists/ownerships`
//! and friends) page with opaque cursors rather than offsets. Every page
//! carries the items under a resource key plus a `next_cursor` and a
//! `previous_cursor`:
//!
//! ```json
//! {"ids": [1, 2, 3], "next_cursor": 5, "previous_cursor": 0}
//! ```
//!
//! # Termination
//!
//! [`collect_cursor_pages`] starts at cursor `-1` and stops when `next_cursor`
//! is absent, `0`, equal to `previous_cursor`, or a cursor it has already
//! requested. A hard cap of [`MAX_CURSOR_PAGES`] requests bounds the loop even
//! when the server returns a malformed cursor sequence.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use twitter_rest::api::common::CursorPage;
//!
//! let page = CursorPage::from_value(
//!     &json!({"ids": [1, 2], "next_cursor": 0, "previous_cursor": 0}),
//!     "ids",
//!     |v| v.as_u64(),
//! );
//! assert_eq!(page.items, vec![1, 2]);
//! assert!(!page.has_next());
//! ```

use std::collections::HashSet;
use std::future::Future;

use serde_json::Value;

use super::Result;

/// Cursor value that requests the first page.
pub const START_CURSOR: i64 = -1;

/// Upper bound on requests issued by a single pagination loop.
pub const MAX_CURSOR_PAGES: usize = 1000;

/// One page of a cursor-paginated response.
///
/// # Type Parameters
///
/// - `T` - The type of items extracted from the page
#[derive(Debug, Clone, PartialEq)]
pub struct CursorPage<T> {
    /// Items found under the page's resource key.
    pub items: Vec<T>,

    /// Cursor for the following page, if the response carried one.
    pub next_cursor: Option<i64>,

    /// Cursor for the preceding page, if the response carried one.
    pub previous_cursor: Option<i64>,
}

impl<T> Default for CursorPage<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_cursor: None,
            previous_cursor: None,
        }
    }
}

impl<T> CursorPage<T> {
    /// Extracts a page from a decoded response.
    ///
    /// Items that `map` rejects are skipped. A missing or non-array resource
    /// key yields an empty page. Cursors are accepted as numbers or numeric
    /// strings (`next_cursor_str` is consulted when `next_cursor` is absent).
    ///
    /// # Parameters
    ///
    /// * `value` - The decoded page
    /// * `key` - The resource key holding the items (`users`, `ids`, `lists`)
    /// * `map` - Converts one JSON item into `T`
    pub fn from_value<F>(value: &Value, key: &str, map: F) -> Self
    where
        F: FnMut(&Value) -> Option<T>,
    {
        let items = value
            .get(key)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(map).collect())
            .unwrap_or_default();

        Self {
            items,
            next_cursor: read_cursor(value, "next_cursor"),
            previous_cursor: read_cursor(value, "previous_cursor"),
        }
    }

    /// Checks if the response points at another page.
    ///
    /// Returns `false` when `next_cursor` is absent, zero, or equal to
    /// `previous_cursor` (a stalled cursor).
    pub fn has_next(&self) -> bool {
        match self.next_cursor {
            Some(0) | None => false,
            Some(next) => Some(next) != self.previous_cursor,
        }
    }

    /// The cursor to request next, or `None` when iteration is finished.
    pub fn next(&self) -> Option<i64> {
        if self.has_next() {
            self.next_cursor
        } else {
            None
        }
    }
}

fn read_cursor(value: &Value, key: &str) -> Option<i64> {
    let parse = |v: &Value| match v {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };

    value
        .get(key)
        .and_then(parse)
        .or_else(|| value.get(format!("{key}_str")).and_then(parse))
}

/// Runs a cursor pagination loop and concatenates every page's items.
///
/// `fetch` is called sequentially with each cursor, starting at `start`.
/// Pages are never requested in parallel since each cursor comes from the
/// previous response.
///
/// # Parameters
///
/// * `start` - The first cursor to request (normally [`START_CURSOR`])
/// * `max_pages` - Request cap for this loop
/// * `fetch` - Requests and parses one page
///
/// # Errors
///
/// The first error returned by `fetch` aborts the loop and is propagated.
///
/// # Example
///
/// ```rust
/// use twitter_rest::api::common::{collect_cursor_pages, CursorPage, START_CURSOR};
///
/// # tokio_test::block_on(async {
/// let ids = collect_cursor_pages(START_CURSOR, 10, |cursor| async move {
///     Ok(match cursor {
///         -1 => CursorPage { items: vec![1, 2], next_cursor: Some(5), previous_cursor: Some(0) },
///         _ => CursorPage { items: vec![3], next_cursor: Some(0), previous_cursor: Some(-1) },
///     })
/// })
/// .await
/// .unwrap();
/// assert_eq!(ids, vec![1, 2, 3]);
/// # });
/// ```
pub async fn collect_cursor_pages<T, F, Fut>(
    start: i64,
    max_pages: usize,
    mut fetch: F,
) -> Result<Vec<T>>
where
    F: FnMut(i64) -> Fut,
    Fut: Future<Output = Result<CursorPage<T>>>,
{
    let mut items = Vec::new();
    let mut visited = HashSet::new();
    let mut cursor = start;

    for _ in 0..max_pages {
        visited.insert(cursor);

        let page = fetch(cursor).await?;
        let next = page.next();
        items.extend(page.items);

        match next {
            Some(next) if visited.contains(&next) => {
                tracing::debug!("Cursor {} was already visited, stopping", next);
                return Ok(items);
            }
            Some(next) => cursor = next,
            None => return Ok(items),
        }
    }

    tracing::warn!(
        "Stopped cursor pagination after {} pages; results may be incomplete",
        max_pages
    );
    Ok(items)
}
