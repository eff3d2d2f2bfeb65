//
//  twitter-rest
//  api/endpoints/statuses.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Single statuses: show, post, destroy, retweet, and media upload.
//!
//! # Length Limit
//!
//! Posts are checked against [`CHARACTER_LIMIT`] before anything is sent.
//! Links count as the configured short-link size regardless of their real
//! length (see [`estimate_status_length`]).

use super::{check_count, MAX_RETWEETS_COUNT};
use crate::api::client::TwitterClient;
use crate::api::common::{Result, TwitterError};
use crate::api::models::{Media, Record, Status};
use crate::api::params::{estimate_status_length, Params};
use crate::api::transport::Part;

/// Maximum status length in characters.
pub const CHARACTER_LIMIT: usize = 140;

/// Parameters for [`TwitterClient::status`].
#[derive(Debug, Clone, PartialEq)]
pub struct StatusQuery {
    pub trim_user: bool,
    pub include_my_retweet: bool,
    pub include_entities: bool,
}

impl Default for StatusQuery {
    fn default() -> Self {
        Self {
            trim_user: false,
            include_my_retweet: true,
            include_entities: true,
        }
    }
}

/// Optional fields for a new status.
///
/// Coordinates are only sent when both latitude and longitude are set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateOptions {
    pub in_reply_to_status_id: Option<u64>,
    /// Ids returned by [`TwitterClient::upload_media`].
    pub media_ids: Vec<u64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub place_id: Option<String>,
    pub display_coordinates: bool,
    pub trim_user: bool,
}

impl UpdateOptions {
    fn apply(&self, params: &mut Params) {
        params.push_opt("in_reply_to_status_id", self.in_reply_to_status_id);
        if !self.media_ids.is_empty() {
            let ids: Vec<String> = self.media_ids.iter().map(u64::to_string).collect();
            params.push("media_ids", ids.join(","));
        }
        if let (Some(lat), Some(long)) = (self.latitude, self.longitude) {
            params.push("lat", lat).push("long", long);
        }
        params.push_opt("place_id", self.place_id.as_deref());
        if self.display_coordinates {
            params.push_flag("display_coordinates", true);
        }
        if self.trim_user {
            params.push_flag("trim_user", true);
        }
    }
}

/// Parameters for [`TwitterClient::retweets_of_me`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RetweetsOfMeQuery {
    pub count: Option<u32>,
    pub since_id: Option<u64>,
    pub max_id: Option<u64>,
    pub trim_user: Option<bool>,
    pub include_entities: Option<bool>,
    pub include_user_entities: Option<bool>,
}

impl TwitterClient {
    /// Fails with `InvalidArgument` when `text` is too long to post.
    pub fn check_status_length(&self, text: &str) -> Result<()> {
        if estimate_status_length(text, self.shortlink_size()) > CHARACTER_LIMIT {
            return Err(TwitterError::invalid(format!(
                "Text must be less than or equal to {CHARACTER_LIMIT} characters"
            )));
        }
        Ok(())
    }

    /// Fetches one status.
    pub async fn status(&self, id: u64, query: &StatusQuery) -> Result<Status> {
        let mut params = Params::new();
        params.push("id", id);
        if query.trim_user {
            params.push("trim_user", 1);
        }
        if query.include_my_retweet {
            params.push("include_my_retweet", 1);
        }
        if !query.include_entities {
            params.push_flag("include_entities", false);
        }

        let data = self.get("statuses/show.json", params).await?;
        Ok(Status::from_value(data))
    }

    /// Deletes one of the authenticating user's statuses.
    pub async fn destroy_status(&self, id: u64, trim_user: bool) -> Result<Status> {
        self.require_auth()?;

        let mut params = Params::new();
        params.push("id", id);
        if trim_user {
            params.push("trim_user", 1);
        }

        let data = self.post(&format!("statuses/destroy/{id}.json"), params).await?;
        Ok(Status::from_value(data))
    }

    /// Posts a status.
    ///
    /// # Errors
    ///
    /// - [`TwitterError::AuthenticationRequired`] without credentials
    /// - [`TwitterError::InvalidArgument`] when the text exceeds
    ///   [`CHARACTER_LIMIT`] after link substitution
    pub async fn post_update(&self, text: &str, options: &UpdateOptions) -> Result<Status> {
        self.require_auth()?;
        self.check_status_length(text)?;

        let mut params = Params::new();
        params.push("status", text);
        options.apply(&mut params);

        let data = self.post("statuses/update.json", params).await?;
        Ok(Status::from_value(data))
    }

    /// Posts text of any length as a series of statuses.
    ///
    /// The text is wrapped at word boundaries. Every part except the last
    /// gets `continuation` appended; a horizontal ellipsis (`…`) survives
    /// Twitter's trimming where `...` does not.
    ///
    /// Line breaks count as plain spaces. Every part is length-checked
    /// before the first one is sent; after that, parts are posted in order
    /// and the first failure stops the series.
    pub async fn post_updates(
        &self,
        text: &str,
        continuation: Option<&str>,
        options: &UpdateOptions,
    ) -> Result<Vec<Status>> {
        self.require_auth()?;
        if text.trim().is_empty() {
            return Err(TwitterError::invalid("'status' must not be empty"));
        }

        let continuation = continuation.unwrap_or("");
        let lines = split_status(text, continuation)?;
        for line in &lines {
            self.check_status_length(line)?;
        }

        let mut posted = Vec::with_capacity(lines.len());
        for line in lines {
            posted.push(self.post_update(&line, options).await?);
        }
        Ok(posted)
    }

    /// Uploads an image for use with [`UpdateOptions::media_ids`].
    pub async fn upload_media(&self, bytes: Vec<u8>, filename: &str) -> Result<Media> {
        self.require_auth()?;

        let data = self
            .post_multipart(
                self.upload_url("media/upload.json"),
                Params::new(),
                vec![Part::file("media", bytes, filename)],
            )
            .await?;
        Ok(Media::from_value(data))
    }

    /// Posts a status with an attached image in one multipart request.
    pub async fn post_update_with_media(
        &self,
        text: &str,
        media: Vec<u8>,
        filename: &str,
        options: &UpdateOptions,
    ) -> Result<Status> {
        self.require_auth()?;
        self.check_status_length(text)?;

        let mut params = Params::new();
        params.push("status", text);
        options.apply(&mut params);

        let data = self
            .post_multipart(
                self.url("statuses/update_with_media.json"),
                params,
                vec![Part::file("media", media, filename)],
            )
            .await?;
        Ok(Status::from_value(data))
    }

    /// Retweets a status.
    pub async fn retweet(&self, id: u64, trim_user: bool) -> Result<Status> {
        self.require_auth()?;
        if id == 0 {
            return Err(TwitterError::invalid("'id' must be a positive number"));
        }

        let mut params = Params::new();
        params.push("id", id);
        if trim_user {
            params.push_flag("trim_user", true);
        }

        let data = self.post(&format!("statuses/retweet/{id}.json"), params).await?;
        Ok(Status::from_value(data))
    }

    /// Up to 100 retweets of a status.
    pub async fn retweets(&self, id: u64, count: Option<u32>, trim_user: bool) -> Result<Vec<Status>> {
        check_count(count, MAX_RETWEETS_COUNT)?;
        self.require_auth()?;

        let mut params = Params::new();
        if trim_user {
            params.push_flag("trim_user", true);
        }
        params.push_opt("count", count);

        let data = self.get(&format!("statuses/retweets/{id}.json"), params).await?;
        Ok(Status::list_from_value(data))
    }

    /// The authenticating user's statuses that others have retweeted.
    pub async fn retweets_of_me(&self, query: &RetweetsOfMeQuery) -> Result<Vec<Status>> {
        check_count(query.count, MAX_RETWEETS_COUNT)?;
        self.require_auth()?;

        let mut params = Params::new();
        params
            .push_opt("count", query.count)
            .push_opt("since_id", query.since_id)
            .push_opt("max_id", query.max_id)
            .push_opt("trim_user", query.trim_user)
            .push_opt("include_entities", query.include_entities)
            .push_opt("include_user_entities", query.include_user_entities);

        let data = self.get("statuses/retweets_of_me.json", params).await?;
        Ok(Status::list_from_value(data))
    }
}

/// Wraps `text` into lines that fit once `continuation` is appended to all
/// but the last.
fn split_status(text: &str, continuation: &str) -> Result<Vec<String>> {
    let width = CHARACTER_LIMIT
        .checked_sub(continuation.chars().count())
        .filter(|w| *w > 0)
        .ok_or_else(|| TwitterError::invalid("'continuation' is too long"))?;

    // textwrap keeps hard line breaks, which would split short text
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let options = textwrap::Options::new(width).break_words(false);
    let mut lines: Vec<String> = textwrap::wrap(&flat, options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect();

    let last = lines.len().saturating_sub(1);
    for line in lines.iter_mut().take(last) {
        line.push_str(continuation);
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{anonymous_client, authenticated_client, form, path, query, MockTransport};
    use crate::api::transport::{Body, PartValue};

    #[tokio::test]
    async fn test_length_boundary_after_link_substitution() {
        let mock = MockTransport::new();
        let client = authenticated_client(&mock);

        // 120 characters + space + link (19) = 140
        let ok = format!("{} https://example.com/a/very/long/path/indeed", "a".repeat(120));
        assert!(client.post_update(&ok, &UpdateOptions::default()).await.is_ok());

        let too_long = format!("{} https://example.com/x", "a".repeat(121));
        let err = client
            .post_update(&too_long, &UpdateOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, TwitterError::InvalidArgument(_)));
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn test_post_update_options() {
        let mock = MockTransport::new();
        mock.respond(r#"{"id": 42, "text": "hello"}"#);
        let client = authenticated_client(&mock);

        let status = client
            .post_update(
                "hello",
                &UpdateOptions {
                    in_reply_to_status_id: Some(41),
                    media_ids: vec![7, 8],
                    latitude: Some(37.5),
                    longitude: None,
                    display_coordinates: true,
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(status.id, Some(42));

        let request = &mock.requests()[0];
        assert_eq!(path(request), "/1.1/statuses/update.json");
        let body = form(request);
        assert_eq!(body["status"], "hello");
        assert_eq!(body["in_reply_to_status_id"], "41");
        assert_eq!(body["media_ids"], "7,8");
        assert_eq!(body["display_coordinates"], "true");
        assert!(!body.contains_key("lat"));
    }

    #[tokio::test]
    async fn test_post_update_requires_auth() {
        let mock = MockTransport::new();
        let client = anonymous_client(&mock);

        let err = client
            .post_update("hi", &UpdateOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, TwitterError::AuthenticationRequired));
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_post_updates_splits_long_text() {
        let mock = MockTransport::new();
        let client = authenticated_client(&mock);

        let text = "word ".repeat(60);
        let posted = client
            .post_updates(text.trim(), Some("…"), &UpdateOptions::default())
            .await
            .unwrap();

        let requests = mock.requests();
        assert_eq!(posted.len(), requests.len());
        assert!(requests.len() >= 3);

        let bodies: Vec<String> = requests.iter().map(|r| form(r)["status"].clone()).collect();
        for body in &bodies[..bodies.len() - 1] {
            assert!(body.ends_with('…'));
            assert!(body.chars().count() <= CHARACTER_LIMIT);
        }
        assert!(!bodies[bodies.len() - 1].ends_with('…'));
    }

    #[test]
    fn test_split_status_short_text_is_single_line() {
        assert_eq!(split_status("hello world", "…").unwrap(), vec!["hello world"]);
        assert!(split_status("x", &"c".repeat(140)).is_err());
    }

    #[test]
    fn test_split_status_ignores_line_breaks() {
        assert_eq!(split_status("hello\nworld", "…").unwrap(), vec!["hello world"]);
        assert_eq!(split_status("a \n\n  b\tc", "…").unwrap(), vec!["a b c"]);
    }

    #[tokio::test]
    async fn test_post_updates_multiline_short_text_is_one_status() {
        let mock = MockTransport::new();
        let client = authenticated_client(&mock);

        let posted = client
            .post_updates("hello\nworld", Some("…"), &UpdateOptions::default())
            .await
            .unwrap();

        assert_eq!(posted.len(), 1);
        assert_eq!(form(&mock.requests()[0])["status"], "hello world");
    }

    #[tokio::test]
    async fn test_post_updates_checks_every_part_before_sending() {
        let mock = MockTransport::new();
        let client = authenticated_client(&mock);

        let text = format!("{} {}", "word ".repeat(30).trim(), "x".repeat(150));
        let err = client
            .post_updates(&text, Some("…"), &UpdateOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, TwitterError::InvalidArgument(_)));
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_retweet_rejects_zero_id() {
        let mock = MockTransport::new();
        let client = authenticated_client(&mock);

        assert!(client.retweet(0, false).await.is_err());
        assert_eq!(mock.calls(), 0);

        client.retweet(20, true).await.unwrap();
        let request = &mock.requests()[0];
        assert_eq!(path(request), "/1.1/statuses/retweet/20.json");
        assert_eq!(form(request)["trim_user"], "true");
    }

    #[tokio::test]
    async fn test_retweets_count_cap() {
        let mock = MockTransport::new();
        let client = authenticated_client(&mock);

        assert!(client.retweets(1, Some(101), false).await.is_err());
        assert!(client
            .retweets_of_me(&RetweetsOfMeQuery {
                count: Some(101),
                ..Default::default()
            })
            .await
            .is_err());
        assert_eq!(mock.calls(), 0);

        client.retweets(5, Some(100), false).await.unwrap();
        assert_eq!(path(&mock.requests()[0]), "/1.1/statuses/retweets/5.json");
        assert_eq!(query(&mock.requests()[0])["count"], "100");
    }

    #[tokio::test]
    async fn test_status_show_is_public() {
        let mock = MockTransport::new();
        mock.respond(r#"{"id": 20, "text": "just setting up my twttr"}"#);
        let client = anonymous_client(&mock);

        let status = client.status(20, &StatusQuery::default()).await.unwrap();
        assert_eq!(status.text.as_deref(), Some("just setting up my twttr"));

        let params = query(&mock.requests()[0]);
        assert_eq!(params["id"], "20");
        assert_eq!(params["include_my_retweet"], "1");
    }

    #[tokio::test]
    async fn test_destroy_status_path() {
        let mock = MockTransport::new();
        let client = authenticated_client(&mock);

        client.destroy_status(99, false).await.unwrap();
        assert_eq!(path(&mock.requests()[0]), "/1.1/statuses/destroy/99.json");
    }

    #[tokio::test]
    async fn test_upload_media_goes_to_upload_host() {
        let mock = MockTransport::new();
        mock.respond(r#"{"media_id": 710511363345354753, "size": 11065, "expires_after_secs": 86400}"#);
        let client = authenticated_client(&mock);

        let media = client.upload_media(vec![1, 2, 3], "cat.png").await.unwrap();
        assert_eq!(media.media_id, Some(710511363345354753));

        let request = &mock.requests()[0];
        assert_eq!(request.url, "https://upload.twitter.com/1.1/media/upload.json");
        match &request.body {
            Body::Multipart(parts) => {
                assert_eq!(parts.len(), 1);
                assert_eq!(parts[0].name, "media");
                assert!(matches!(&parts[0].value, PartValue::File { filename, .. } if filename == "cat.png"));
            }
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_with_media_sends_text_fields() {
        let mock = MockTransport::new();
        let client = authenticated_client(&mock);

        client
            .post_update_with_media("look", vec![0], "a.jpg", &UpdateOptions::default())
            .await
            .unwrap();

        match &mock.requests()[0].body {
            Body::Multipart(parts) => {
                assert_eq!(parts[0].name, "status");
                assert_eq!(parts[0].value, PartValue::Text("look".to_string()));
                assert_eq!(parts[1].name, "media");
            }
            other => panic!("unexpected body: {other:?}"),
        }
    }
}
