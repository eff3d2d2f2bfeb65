//
//  twitter-rest
//  api/mock.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Recording transport for unit tests.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::client::{ClientConfig, TwitterClient};
use super::common::TransportError;
use super::transport::{Body, HttpRequest, HttpResponse, Transport};
use crate::auth::Credentials;

/// Replays queued responses and records every request.
///
/// Once the queue is empty every request gets `{}` with status 200.
#[derive(Default)]
pub(crate) struct MockTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn respond(&self, body: &str) -> &Self {
        self.push(Ok(HttpResponse {
            status: 200,
            body: body.to_string(),
        }))
    }

    pub(crate) fn fail(&self, status: u16, body: &str) -> &Self {
        self.push(Err(TransportError::Status {
            status,
            body: body.to_string(),
        }))
    }

    fn push(&self, response: Result<HttpResponse, TransportError>) -> &Self {
        self.responses
            .lock()
            .expect("responses lock")
            .push_back(response);
        self
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    pub(crate) fn calls(&self) -> usize {
        self.requests.lock().expect("requests lock").len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().expect("requests lock").push(request);
        self.responses
            .lock()
            .expect("responses lock")
            .pop_front()
            .unwrap_or_else(|| {
                Ok(HttpResponse {
                    status: 200,
                    body: "{}".to_string(),
                })
            })
    }
}

pub(crate) fn anonymous_client(mock: &Arc<MockTransport>) -> TwitterClient {
    TwitterClient::with_transport(ClientConfig::default(), mock.clone())
}

pub(crate) fn authenticated_client(mock: &Arc<MockTransport>) -> TwitterClient {
    let mut client = anonymous_client(mock);
    client.set_credentials(Credentials::new("ck", "cs", "at", "ats"));
    client
}

/// Path of the request URL, e.g. `/1.1/statuses/show.json`.
pub(crate) fn path(request: &HttpRequest) -> String {
    url::Url::parse(&request.url)
        .map(|u| u.path().to_string())
        .unwrap_or_default()
}

/// Decoded query parameters.
pub(crate) fn query(request: &HttpRequest) -> HashMap<String, String> {
    url::Url::parse(&request.url)
        .map(|u| u.query_pairs().into_owned().collect())
        .unwrap_or_default()
}

/// Decoded form body parameters.
pub(crate) fn form(request: &HttpRequest) -> HashMap<String, String> {
    match &request.body {
        Body::Form(text) => url::form_urlencoded::parse(text.as_bytes())
            .into_owned()
            .collect(),
        _ => HashMap::new(),
    }
}
