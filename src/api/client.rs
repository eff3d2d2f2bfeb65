//
//  twitter-rest
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Twitter API Client
//!
//! [`TwitterClient`] owns the configuration, the OAuth credentials and the
//! transport. The endpoint methods themselves live in
//! [`crate::api::endpoints`], one file per resource family; this module holds
//! the shared request path they all go through:
//!
//! 1. Merge the configured default parameters under the call's own
//! 2. Encode them as a query string (GET) or form body (POST)
//! 3. Sign the request when credentials are installed
//! 4. Add `User-Agent` and any configured headers
//! 5. Send through the [`Transport`] and run [`parse_and_check`] on the body
//!
//! ## Example
//!
//! ```rust,no_run
//! use twitter_rest::api::{ClientConfig, TwitterClient};
//! use twitter_rest::auth::Credentials;
//!
//! # async fn example() -> twitter_rest::api::common::Result<()> {
//! let mut client = TwitterClient::new(ClientConfig::default())?;
//! client.set_credentials(Credentials::new("ck", "cs", "at", "ats"));
//!
//! let me = client.verify_credentials().await?;
//! println!("{:?}", me.and_then(|u| u.screen_name));
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use super::common::{collect_cursor_pages, CursorPage, Result, TwitterError, MAX_CURSOR_PAGES};
use super::params::{build_form_body, build_query, Params};
use super::response::parse_and_check;
use super::transport::{Body, HttpRequest, Method, Part, ReqwestTransport, Transport};
use crate::auth::{Credentials, OAuthSigner, RequestSigner};

/// Default REST endpoint root.
pub const DEFAULT_BASE_URL: &str = "https://api.twitter.com/1.1";

/// Default media upload root.
pub const DEFAULT_UPLOAD_URL: &str = "https://upload.twitter.com/1.1";

/// Characters Twitter's shortener turns a link into.
pub const DEFAULT_SHORTLINK_SIZE: usize = 19;

/// Default request timeout for [`ReqwestTransport`].
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client settings that are not credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub upload_url: String,
    pub user_agent: String,
    /// Extra headers sent with every request.
    pub request_headers: Vec<(String, String)>,
    /// Parameters merged under every request's own parameters.
    pub default_params: Vec<(String, String)>,
    pub shortlink_size: usize,
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            upload_url: DEFAULT_UPLOAD_URL.to_string(),
            user_agent: format!("twitter-rest/{}", crate::VERSION),
            request_headers: Vec::new(),
            default_params: Vec::new(),
            shortlink_size: DEFAULT_SHORTLINK_SIZE,
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }
}

impl ClientConfig {
    /// Sets a request header, replacing one with the same name.
    pub fn set_header(&mut self, name: &str, value: &str) {
        upsert(&mut self.request_headers, name, value, true);
    }

    /// Sets a default parameter, replacing one with the same key.
    pub fn set_default_param(&mut self, key: &str, value: &str) {
        upsert(&mut self.default_params, key, value, false);
    }
}

fn upsert(pairs: &mut Vec<(String, String)>, key: &str, value: &str, ignore_case: bool) {
    let found = pairs.iter_mut().find(|(k, _)| {
        if ignore_case {
            k.eq_ignore_ascii_case(key)
        } else {
            k == key
        }
    });
    match found {
        Some(pair) => pair.1 = value.to_string(),
        None => pairs.push((key.to_string(), value.to_string())),
    }
}

/// Client for the Twitter REST API v1.1.
///
/// Request methods borrow `&self`; credential changes need `&mut self`, so
/// they can never interleave with a request in flight.
pub struct TwitterClient {
    transport: Arc<dyn Transport>,
    config: ClientConfig,
    credentials: Credentials,
    signer: Option<Arc<dyn RequestSigner>>,
}

impl std::fmt::Debug for TwitterClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwitterClient")
            .field("config", &self.config)
            .field("credentials", &self.credentials)
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

impl TwitterClient {
    /// Creates an unauthenticated client using [`ReqwestTransport`].
    ///
    /// # Errors
    ///
    /// Returns [`TwitterError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(config.timeout)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Creates an unauthenticated client over a caller-supplied transport.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            config,
            credentials: Credentials::default(),
            signer: None,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Replaces all four credential fields at once.
    ///
    /// Complete credentials install an [`OAuthSigner`]; incomplete ones
    /// leave the client unsigned and unauthenticated.
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.signer = OAuthSigner::from_credentials(&credentials)
            .map(|signer| Arc::new(signer) as Arc<dyn RequestSigner>);
        self.credentials = credentials;
    }

    /// Installs a custom signer alongside complete credentials.
    pub fn set_signer(&mut self, credentials: Credentials, signer: Arc<dyn RequestSigner>) {
        self.signer = credentials.is_complete().then_some(signer);
        self.credentials = credentials;
    }

    /// Forgets all credentials and stops signing requests.
    pub fn clear_credentials(&mut self) {
        self.credentials = Credentials::default();
        self.signer = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_complete() && self.signer.is_some()
    }

    /// Fails with [`TwitterError::AuthenticationRequired`] before any I/O
    /// when the client is not fully credentialed.
    pub(crate) fn require_auth(&self) -> Result<()> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(TwitterError::AuthenticationRequired)
        }
    }

    pub fn set_user_agent(&mut self, user_agent: &str) {
        self.config.user_agent = user_agent.to_string();
    }

    /// Sets the `X-Twitter-Client*` identification headers.
    pub fn set_x_twitter_headers(&mut self, client: &str, url: &str, version: &str) {
        self.config.set_header("X-Twitter-Client", client);
        self.config.set_header("X-Twitter-Client-URL", url);
        self.config.set_header("X-Twitter-Client-Version", version);
    }

    /// Suggests the "from source" value shown on twitter.com.
    pub fn set_source(&mut self, source: &str) {
        self.config.set_default_param("source", source);
    }

    pub(crate) fn shortlink_size(&self) -> usize {
        self.config.shortlink_size
    }

    /// Absolute URL for a path under the REST root.
    pub(crate) fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Absolute URL for a path under the upload root.
    pub(crate) fn upload_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.upload_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub(crate) async fn get(&self, path: &str, params: Params) -> Result<Value> {
        self.execute(Method::Get, self.url(path), params, Vec::new()).await
    }

    pub(crate) async fn post(&self, path: &str, params: Params) -> Result<Value> {
        self.execute(Method::Post, self.url(path), params, Vec::new()).await
    }

    /// POSTs `multipart/form-data` to an absolute URL. Text fields come from
    /// `params`; `files` are appended after them.
    pub(crate) async fn post_multipart(
        &self,
        url: String,
        params: Params,
        files: Vec<Part>,
    ) -> Result<Value> {
        self.execute(Method::Post, url, params, files).await
    }

    /// Runs a cursor loop over `path`, extracting items under `key`.
    pub(crate) async fn get_cursored<T>(
        &self,
        path: &str,
        params: Params,
        start: i64,
        key: &str,
        map: fn(&Value) -> Option<T>,
    ) -> Result<Vec<T>> {
        collect_cursor_pages(start, MAX_CURSOR_PAGES, |cursor| {
            let mut params = params.clone();
            params.set("cursor", cursor);
            async move {
                tracing::debug!("Fetching {} page at cursor {}", path, cursor);
                let value = self.get(path, params).await?;
                Ok(CursorPage::from_value(&value, key, map))
            }
        })
        .await
    }

    async fn execute(
        &self,
        method: Method,
        url: String,
        params: Params,
        files: Vec<Part>,
    ) -> Result<Value> {
        let params = params.with_defaults(&self.config.default_params);

        // Multipart fields are not part of the OAuth signature base string.
        let (request_url, body, signed) = match method {
            Method::Get => {
                let query = build_query(&params);
                let request_url = if query.is_empty() {
                    url.clone()
                } else {
                    format!("{url}?{query}")
                };
                (request_url, Body::Empty, params.pairs())
            }
            Method::Post if files.is_empty() => {
                (url.clone(), Body::Form(build_form_body(&params)), params.pairs())
            }
            Method::Post => {
                let mut parts: Vec<Part> = params
                    .pairs()
                    .iter()
                    .map(|(k, v)| Part::text(k, v))
                    .collect();
                parts.extend(files);
                (url.clone(), Body::Multipart(parts), Vec::new())
            }
        };

        let mut headers = vec![("User-Agent".to_string(), self.config.user_agent.clone())];
        headers.extend(self.config.request_headers.iter().cloned());
        if let Some(signer) = &self.signer {
            let authorization = signer.authorization(method.as_str(), &url, &signed)?;
            headers.push(("Authorization".to_string(), authorization));
        }

        tracing::debug!("{} {}", method, request_url);

        let response = self
            .transport
            .send(HttpRequest {
                method,
                url: request_url,
                headers,
                body,
            })
            .await?;

        parse_and_check(&response.body)
    }
}

/// Removes `key` from a decoded object, or returns `Null`.
pub(crate) fn take_field(mut value: Value, key: &str) -> Value {
    value.get_mut(key).map(Value::take).unwrap_or_default()
}
