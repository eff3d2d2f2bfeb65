//
//  twitter-rest
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the Twitter REST API
//!
//! This module provides the error taxonomy shared by every endpoint method,
//! plus cursor pagination (re-exported from the [`pagination`] submodule).
//!
//! # Overview
//!
//! Failures are split into four families so callers can choose a retry policy:
//!
//! | Error | Raised by | Retry? |
//! |-------|-----------|--------|
//! | [`TwitterError::InvalidArgument`] | local validation, before any request | never |
//! | [`TwitterError::AuthenticationRequired`] | local credential check, before any request | never |
//! | [`TwitterError::Remote`] | the response parser | only [`RemoteError::is_retryable`] |
//! | [`TwitterError::Transport`] | the transport collaborator | caller's choice |
//!
//! # Example
//!
//! ```rust
//! use twitter_rest::api::common::{RemoteError, TwitterError};
//!
//! fn describe(err: &TwitterError) -> &'static str {
//!     match err {
//!         TwitterError::Remote(remote) if remote.is_retryable() => "try again later",
//!         TwitterError::Remote(_) => "twitter rejected the request",
//!         TwitterError::AuthenticationRequired => "log in first",
//!         _ => "request failed",
//!     }
//! }
//!
//! assert_eq!(describe(&TwitterError::Remote(RemoteError::OverCapacity)), "try again later");
//! ```

use thiserror::Error;

mod pagination;

pub use pagination::*;

/// Result alias used throughout the API layer.
pub type Result<T> = std::result::Result<T, TwitterError>;

/// Unified error type for all Twitter API operations.
///
/// # Variants
///
/// | Variant | Description |
/// |---------|-------------|
/// | `InvalidArgument` | A caller-supplied parameter failed local validation |
/// | `AuthenticationRequired` | The client does not hold all four OAuth credentials |
/// | `Remote` | The response was an outage page, malformed, or an API error envelope |
/// | `Transport` | The HTTP exchange itself failed or returned a non-2xx status |
/// | `Signing` | The request could not be signed |
/// | `Json` | A record could not be serialized |
#[derive(Error, Debug)]
pub enum TwitterError {
    /// A parameter failed local validation. Never reaches the network.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation needs consumer and access-token credentials.
    #[error("Authentication required: set consumer and access token credentials first")]
    AuthenticationRequired,

    /// Twitter answered, but not with a usable payload.
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// The transport collaborator failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Computing the OAuth signature failed.
    #[error("Signing failed: {0}")]
    Signing(String),

    /// A record could not be encoded as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TwitterError {
    /// Builds an [`InvalidArgument`](Self::InvalidArgument) error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Returns `true` if Twitter reported the given API error code.
    ///
    /// The code is looked up in a parsed error envelope, or in the body of a
    /// non-2xx transport error when that body is itself an error envelope
    /// (Twitter sends most API errors with a 4xx status).
    ///
    /// # Example
    ///
    /// ```rust
    /// use twitter_rest::api::common::{RemoteError, TwitterError};
    ///
    /// let err = TwitterError::Remote(RemoteError::Api {
    ///     message: "No user matches for specified terms.".to_string(),
    ///     codes: vec![17],
    /// });
    /// assert!(err.has_api_code(17));
    /// assert!(!err.has_api_code(34));
    /// ```
    pub fn has_api_code(&self, code: i64) -> bool {
        match self {
            Self::Remote(remote) => remote.codes().contains(&code),
            Self::Transport(TransportError::Status { body, .. }) => {
                match crate::api::response::parse_and_check(body) {
                    Err(TwitterError::Remote(remote)) => remote.codes().contains(&code),
                    _ => false,
                }
            }
            _ => false,
        }
    }

    /// Returns `true` for a transport error carrying HTTP 401.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Transport(err) if err.is_unauthorized())
    }
}

/// Failure conditions detected by the response parser.
///
/// Twitter sometimes degrades to serving HTML instead of JSON during outages.
/// Those pages are distinguished from well-formed error envelopes and from
/// bodies that are simply not JSON.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// The "over capacity" outage page was served.
    #[error("Twitter is over capacity")]
    OverCapacity,

    /// A generic HTML error page was served.
    #[error("Twitter reported a technical error")]
    TechnicalError,

    /// The body could not be decoded as JSON at all.
    #[error("Invalid JSON payload: {0}")]
    InvalidPayload(String),

    /// The JSON carried a top-level `error` or `errors` field.
    ///
    /// # Fields
    ///
    /// * `message` - The message(s) reported by Twitter, joined with `"; "`
    /// * `codes` - The numeric error codes, when Twitter provided any
    #[error("Twitter API error: {message}")]
    Api {
        /// Message text passed through from the envelope.
        message: String,
        /// Error codes passed through from the envelope.
        codes: Vec<i64>,
    },
}

impl RemoteError {
    /// Outage pages are worth retrying with backoff; everything else is not.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::OverCapacity | Self::TechnicalError)
    }

    /// The API error codes carried by this error, if any.
    pub fn codes(&self) -> &[i64] {
        match self {
            Self::Api { codes, .. } => codes,
            _ => &[],
        }
    }
}

/// Errors raised by a [`Transport`](crate::api::transport::Transport).
#[derive(Error, Debug)]
pub enum TransportError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The raw response body.
        body: String,
    },

    /// Connection, TLS, timeout or decoding failure inside reqwest.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Any other failure reported by a custom transport.
    #[error("Transport error: {0}")]
    Other(String),
}

impl TransportError {
    /// The HTTP status, when the failure was a status error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` for HTTP 401 Unauthorized.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}
