//
//  twitter-rest
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Transport
//!
//! The client never talks to `reqwest` directly. Every request is described
//! as an [`HttpRequest`] and handed to a [`Transport`], which returns the raw
//! response body. This keeps the endpoint layer testable: tests swap in a
//! recording transport and assert on exactly what would have been sent.
//!
//! ## Status Handling
//!
//! A transport returns `Ok` only for 2xx responses. Anything else becomes
//! [`TransportError::Status`] carrying the status code and the raw body, so
//! the caller can still inspect Twitter's error envelope.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart;

use super::common::TransportError;

/// HTTP method. Twitter's v1.1 API only uses these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Empty,
    /// `application/x-www-form-urlencoded` text.
    Form(String),
    /// `multipart/form-data` parts.
    Multipart(Vec<Part>),
}

/// One field of a multipart body.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub name: String,
    pub value: PartValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PartValue {
    Text(String),
    File { bytes: Vec<u8>, filename: String },
}

impl Part {
    pub fn text(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: PartValue::Text(value.to_string()),
        }
    }

    pub fn file(name: &str, bytes: Vec<u8>, filename: &str) -> Self {
        Self {
            name: name.to_string(),
            value: PartValue::File {
                bytes,
                filename: filename.to_string(),
            },
        }
    }
}

/// A fully built request: URL already carries the query string, headers
/// already include `Authorization`.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Body,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A successful response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Sends requests on behalf of the client.
///
/// Implementations must map non-2xx responses to [`TransportError::Status`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// The default transport, backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a transport with an optional overall request timeout.
    pub fn new(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
        })
    }

    /// Wraps an existing client, e.g. one with custom proxy settings.
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = match request.method {
            Method::Get => self.http.get(&request.url),
            Method::Post => self.http.post(&request.url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder = match request.body {
            Body::Empty => builder,
            Body::Form(text) => builder
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(text),
            Body::Multipart(parts) => {
                let mut form = multipart::Form::new();
                for part in parts {
                    form = match part.value {
                        PartValue::Text(text) => form.text(part.name, text),
                        PartValue::File { bytes, filename } => form.part(
                            part.name,
                            multipart::Part::bytes(bytes).file_name(filename),
                        ),
                    };
                }
                builder.multipart(form)
            }
        };

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(HttpResponse {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_get_sends_headers_and_returns_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/statuses/show.json")
            .match_query(Matcher::UrlEncoded("id".into(), "20".into()))
            .match_header("authorization", "OAuth test")
            .match_header("user-agent", "tw-test")
            .with_status(200)
            .with_body(r#"{"id":20}"#)
            .create_async()
            .await;

        let transport = ReqwestTransport::new(None).unwrap();
        let response = transport
            .send(HttpRequest {
                method: Method::Get,
                url: format!("{}/statuses/show.json?id=20", server.url()),
                headers: vec![
                    ("Authorization".to_string(), "OAuth test".to_string()),
                    ("User-Agent".to_string(), "tw-test".to_string()),
                ],
                body: Body::Empty,
            })
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, r#"{"id":20}"#);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_post_form_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/statuses/update.json")
            .match_header("content-type", "application/x-www-form-urlencoded")
            .match_body(Matcher::UrlEncoded("status".into(), "hello world".into()))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let transport = ReqwestTransport::new(Some(Duration::from_secs(5))).unwrap();
        transport
            .send(HttpRequest {
                method: Method::Post,
                url: format!("{}/statuses/update.json", server.url()),
                headers: vec![],
                body: Body::Form("status=hello+world".to_string()),
            })
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_multipart_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/media/upload.json")
            .match_header(
                "content-type",
                Matcher::Regex("^multipart/form-data".to_string()),
            )
            .match_body(Matcher::Regex(r#"name="media"; filename="cat.png""#.to_string()))
            .with_status(200)
            .with_body(r#"{"media_id":1}"#)
            .create_async()
            .await;

        let transport = ReqwestTransport::new(None).unwrap();
        transport
            .send(HttpRequest {
                method: Method::Post,
                url: format!("{}/media/upload.json", server.url()),
                headers: vec![],
                body: Body::Multipart(vec![Part::file("media", vec![0x89, 0x50], "cat.png")]),
            })
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_is_status_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/account/verify_credentials.json")
            .with_status(401)
            .with_body(r#"{"errors":[{"code":32,"message":"Could not authenticate you."}]}"#)
            .create_async()
            .await;

        let transport = ReqwestTransport::new(None).unwrap();
        let err = transport
            .send(HttpRequest {
                method: Method::Get,
                url: format!("{}/account/verify_credentials.json", server.url()),
                headers: vec![],
                body: Body::Empty,
            })
            .await
            .unwrap_err();

        assert!(err.is_unauthorized());
        match err {
            TransportError::Status { body, .. } => assert!(body.contains("Could not authenticate")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_header_lookup_ignores_case() {
        let request = HttpRequest {
            method: Method::Get,
            url: "https://api.twitter.com/1.1/x.json".to_string(),
            headers: vec![("User-Agent".to_string(), "tw".to_string())],
            body: Body::Empty,
        };
        assert_eq!(request.header("user-agent"), Some("tw"));
        assert_eq!(request.header("authorization"), None);
    }
}
