//
//  twitter-rest
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module binds the Twitter REST API v1.1.
//!
//! ## Architecture
//!
//! - [`client`]: [`TwitterClient`], its configuration and the shared request path
//! - [`endpoints`]: the endpoint methods, one file per resource family
//! - [`transport`]: the [`Transport`](transport::Transport) seam and its reqwest implementation
//! - [`params`]: request parameter encoding and validation helpers
//! - [`response`]: response decoding and error envelope detection
//! - [`models`]: typed records built from responses
//! - [`common`]: error types and cursor pagination
//!
//! ## Usage
//!
//! ```rust,no_run
//! use twitter_rest::api::{ClientConfig, SearchQuery, TwitterClient};
//! use twitter_rest::auth::Credentials;
//!
//! # async fn example() -> twitter_rest::api::common::Result<()> {
//! let mut client = TwitterClient::new(ClientConfig::default())?;
//! client.set_credentials(Credentials::new("ck", "cs", "at", "ats"));
//!
//! let query = SearchQuery::term("rustlang");
//! for status in client.search(&query).await? {
//!     println!("{}", status.text.unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every method returns [`common::Result`]. Validation and authentication
//! failures are raised before any request is sent; see [`common::TwitterError`].

pub mod client;
pub mod common;
pub mod endpoints;
pub mod models;
pub mod params;
pub mod response;
pub mod transport;

#[cfg(test)]
pub(crate) mod mock;

pub use client::{ClientConfig, TwitterClient};
pub use common::{RemoteError, TransportError, TwitterError};
pub use endpoints::*;
