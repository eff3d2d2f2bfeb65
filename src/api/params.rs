//
//  twitter-rest
//  api/params.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request Parameter Builder
//!
//! Converts endpoint arguments into the `application/x-www-form-urlencoded`
//! text Twitter expects, either as a query string (GET) or a form body (POST).
//!
//! ## Rules
//!
//! - Entries whose value is `None` are dropped entirely, never sent empty
//! - Values are UTF-8 and percent/form-encoded by [`url::form_urlencoded`]
//! - Insertion order is preserved; [`Params::set`] replaces a key in place
//!
//! Endpoint-specific validation happens in the endpoint methods, not here.
//! The helpers [`parse_numeric`] and [`estimate_status_length`] are shared by
//! those methods.
//!
//! ## Example
//!
//! ```rust
//! use twitter_rest::api::params::{build_query, Params};
//!
//! let mut params = Params::new();
//! params
//!     .push("q", "café")
//!     .push_opt("lang", None::<&str>)
//!     .push("count", 15);
//!
//! assert_eq!(build_query(&params), "q=caf%C3%A9&count=15");
//! ```

use url::form_urlencoded;

use super::common::{Result, TwitterError};

/// Ordered request parameters with optional values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, Option<String>)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter with a value.
    pub fn push(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.entries.push((key.to_string(), Some(value.to_string())));
        self
    }

    /// Appends a parameter that is dropped at encoding time when `None`.
    pub fn push_opt<T: ToString>(&mut self, key: &str, value: Option<T>) -> &mut Self {
        self.entries
            .push((key.to_string(), value.map(|v| v.to_string())));
        self
    }

    /// Appends `"true"` or `"false"`.
    pub fn push_flag(&mut self, key: &str, value: bool) -> &mut Self {
        self.push(key, if value { "true" } else { "false" })
    }

    /// Replaces the first entry with this key, or appends one.
    pub fn set(&mut self, key: &str, value: impl ToString) -> &mut Self {
        let value = Some(value.to_string());
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key.to_string(), value)),
        }
        self
    }

    /// The first non-null value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, v)| k == key && v.is_some())
            .and_then(|(_, v)| v.as_deref())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// `true` when no entry would be encoded.
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|(_, v)| v.is_none())
    }

    /// The non-null entries, in order. Used for request signing.
    pub fn pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_ref().map(|v| (k.clone(), v.clone())))
            .collect()
    }

    /// Returns these parameters with `defaults` merged underneath.
    ///
    /// Defaults come first; a default whose key is already present here is
    /// skipped, so explicit parameters always win.
    pub fn with_defaults(&self, defaults: &[(String, String)]) -> Params {
        let mut merged = Params::new();
        for (key, value) in defaults {
            if !self.contains(key) {
                merged.push(key, value);
            }
        }
        merged.entries.extend(self.entries.iter().cloned());
        merged
    }
}

impl<K: ToString, V: ToString> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.push(&k.to_string(), v);
        }
        params
    }
}

/// Encodes parameters as a URL query string (without the leading `?`).
pub fn build_query(params: &Params) -> String {
    encode(params)
}

/// Encodes parameters as an `application/x-www-form-urlencoded` body.
pub fn build_form_body(params: &Params) -> String {
    encode(params)
}

fn encode(params: &Params) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in &params.entries {
        if let Some(value) = value {
            serializer.append_pair(key, value);
        }
    }
    serializer.finish()
}

/// Parses a string-sourced numeric parameter.
///
/// # Errors
///
/// Returns [`TwitterError::InvalidArgument`] naming the parameter when `raw`
/// is not an integer.
///
/// # Example
///
/// ```rust
/// use twitter_rest::api::params::parse_numeric;
///
/// assert_eq!(parse_numeric("since_id", " 42 ").unwrap(), 42);
/// let err = parse_numeric("since_id", "abc").unwrap_err();
/// assert_eq!(err.to_string(), "Invalid argument: 'since_id' must be an integer");
/// ```
pub fn parse_numeric(name: &str, raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| TwitterError::invalid(format!("'{name}' must be an integer")))
}

/// Parses a string-sourced id (a non-negative 64-bit integer).
pub fn parse_id(name: &str, raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| TwitterError::invalid(format!("'{name}' must be an integer")))
}

/// Estimates the length Twitter will count for a status.
///
/// The text is split on single spaces; every token containing `http://` or
/// `https://` counts as exactly `shortlink_size` characters, since Twitter
/// wraps links with its shortener. Other tokens count their characters.
///
/// # Example
///
/// ```rust
/// use twitter_rest::api::params::estimate_status_length;
///
/// assert_eq!(estimate_status_length("read https://example.com/a/very/long/path", 19), 24);
/// assert_eq!(estimate_status_length("naïve", 19), 5);
/// ```
pub fn estimate_status_length(text: &str, shortlink_size: usize) -> usize {
    let tokens: Vec<&str> = text.split(' ').collect();
    let separators = tokens.len().saturating_sub(1);

    tokens
        .iter()
        .map(|token| {
            if token.contains("http://") || token.contains("https://") {
                shortlink_size
            } else {
                token.chars().count()
            }
        })
        .sum::<usize>()
        + separators
}

/// Identifies a single user by id or by screen name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserRef {
    Id(u64),
    ScreenName(String),
}

impl UserRef {
    /// Parses `"@name"`, `"name"` or a numeric id.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if let Some(name) = raw.strip_prefix('@') {
            return Self::screen_name(name);
        }
        match raw.parse::<u64>() {
            Ok(id) => Ok(Self::Id(id)),
            Err(_) => Self::screen_name(raw),
        }
    }

    pub fn screen_name(name: &str) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(TwitterError::invalid("'screen_name' must not be empty"));
        }
        Ok(Self::ScreenName(name.trim().to_string()))
    }

    /// Adds `user_id` or `screen_name`.
    pub(crate) fn apply(&self, params: &mut Params) {
        self.apply_as(params, "user_id", "screen_name");
    }

    /// Adds the reference under caller-chosen keys.
    pub(crate) fn apply_as(&self, params: &mut Params, id_key: &str, name_key: &str) {
        match self {
            Self::Id(id) => params.push(id_key, id),
            Self::ScreenName(name) => params.push(name_key, name),
        };
    }
}

impl From<u64> for UserRef {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

/// Identifies a list, either by id or by owner plus slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRef {
    Id(u64),
    Slug { owner: UserRef, slug: String },
}

impl ListRef {
    pub fn slug(owner: UserRef, slug: &str) -> Result<Self> {
        if slug.trim().is_empty() {
            return Err(TwitterError::invalid("'slug' must not be empty"));
        }
        Ok(Self::Slug {
            owner,
            slug: slug.trim().to_string(),
        })
    }

    pub(crate) fn apply(&self, params: &mut Params) {
        match self {
            Self::Id(id) => {
                params.push("list_id", id);
            }
            Self::Slug { owner, slug } => {
                params.push("slug", slug);
                owner.apply_as(params, "owner_id", "owner_screen_name");
            }
        }
    }
}
