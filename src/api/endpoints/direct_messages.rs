//
//  twitter-rest
//  api/endpoints/direct_messages.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Direct messages: received, sent, send and delete.

use crate::api::client::TwitterClient;
use crate::api::common::{Result, TwitterError};
use crate::api::models::{DirectMessage, Record};
use crate::api::params::{Params, UserRef};

/// Parameters for [`TwitterClient::direct_messages`].
#[derive(Debug, Clone, PartialEq)]
pub struct DirectMessagesQuery {
    pub since_id: Option<u64>,
    pub max_id: Option<u64>,
    pub count: Option<u32>,
    pub include_entities: bool,
}

impl Default for DirectMessagesQuery {
    fn default() -> Self {
        Self {
            since_id: None,
            max_id: None,
            count: None,
            include_entities: true,
        }
    }
}

/// Parameters for [`TwitterClient::sent_direct_messages`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SentDirectMessagesQuery {
    pub since_id: Option<u64>,
    pub max_id: Option<u64>,
    pub count: Option<u32>,
    pub page: Option<u32>,
    pub include_entities: bool,
}

impl TwitterClient {
    /// Messages received by the authenticating user, newest first.
    pub async fn direct_messages(&self, query: &DirectMessagesQuery) -> Result<Vec<DirectMessage>> {
        self.require_auth()?;

        let mut params = Params::new();
        params
            .push_opt("since_id", query.since_id)
            .push_opt("max_id", query.max_id)
            .push_opt("count", query.count);
        if !query.include_entities {
            params.push_flag("include_entities", false);
        }
        params.push("skip_status", 1);

        let data = self.get("direct_messages.json", params).await?;
        Ok(DirectMessage::list_from_value(data))
    }

    /// Messages sent by the authenticating user.
    pub async fn sent_direct_messages(
        &self,
        query: &SentDirectMessagesQuery,
    ) -> Result<Vec<DirectMessage>> {
        self.require_auth()?;

        let mut params = Params::new();
        params
            .push_opt("since_id", query.since_id)
            .push_opt("page", query.page)
            .push_opt("max_id", query.max_id)
            .push_opt("count", query.count);
        if query.include_entities {
            params.push_flag("include_entities", true);
        }

        let data = self.get("direct_messages/sent.json", params).await?;
        Ok(DirectMessage::list_from_value(data))
    }

    /// Sends a message to `recipient`.
    pub async fn send_direct_message(&self, text: &str, recipient: &UserRef) -> Result<DirectMessage> {
        if text.trim().is_empty() {
            return Err(TwitterError::invalid("'text' must not be empty"));
        }
        self.require_auth()?;

        let mut params = Params::new();
        params.push("text", text);
        recipient.apply(&mut params);

        let data = self.post("direct_messages/new.json", params).await?;
        Ok(DirectMessage::from_value(data))
    }

    /// Deletes a message the authenticating user received.
    pub async fn destroy_direct_message(&self, id: u64, include_entities: bool) -> Result<DirectMessage> {
        self.require_auth()?;

        let mut params = Params::new();
        params.push("id", id).push_flag("include_entities", include_entities);

        let data = self.post("direct_messages/destroy.json", params).await?;
        Ok(DirectMessage::from_value(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{anonymous_client, authenticated_client, form, path, query, MockTransport};

    #[tokio::test]
    async fn test_direct_messages_parameters() {
        let mock = MockTransport::new();
        mock.respond(
            r#"[{"id": 240136858829479936, "text": "hi", "sender_id": "12",
                 "created_at": "Mon Aug 27 17:21:03 +0000 2012"}]"#,
        );
        let client = authenticated_client(&mock);

        let messages = client
            .direct_messages(&DirectMessagesQuery {
                count: Some(5),
                include_entities: false,
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(messages[0].sender_id, Some(12));
        assert_eq!(messages[0].created_at, Some(1346088063));

        let request = &mock.requests()[0];
        assert_eq!(path(request), "/1.1/direct_messages.json");
        let params = query(request);
        assert_eq!(params["count"], "5");
        assert_eq!(params["include_entities"], "false");
        assert_eq!(params["skip_status"], "1");
    }

    #[tokio::test]
    async fn test_sent_direct_messages() {
        let mock = MockTransport::new();
        let client = authenticated_client(&mock);

        client
            .sent_direct_messages(&SentDirectMessagesQuery {
                page: Some(2),
                ..Default::default()
            })
            .await
            .unwrap();

        let request = &mock.requests()[0];
        assert_eq!(path(request), "/1.1/direct_messages/sent.json");
        assert_eq!(query(request)["page"], "2");
    }

    #[tokio::test]
    async fn test_send_direct_message() {
        let mock = MockTransport::new();
        mock.respond(r#"{"id": 1, "text": "hello", "recipient_screen_name": "jack"}"#);
        let client = authenticated_client(&mock);

        let message = client
            .send_direct_message("hello", &UserRef::ScreenName("jack".to_string()))
            .await
            .unwrap();
        assert_eq!(message.recipient_screen_name.as_deref(), Some("jack"));

        let body = form(&mock.requests()[0]);
        assert_eq!(body["text"], "hello");
        assert_eq!(body["screen_name"], "jack");
    }

    #[tokio::test]
    async fn test_send_rejects_empty_text() {
        let mock = MockTransport::new();
        let client = authenticated_client(&mock);

        let err = client
            .send_direct_message("  ", &UserRef::Id(1))
            .await
            .unwrap_err();
        assert!(matches!(err, TwitterError::InvalidArgument(_)));
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_destroy_direct_message() {
        let mock = MockTransport::new();
        let client = authenticated_client(&mock);

        client.destroy_direct_message(9, true).await.unwrap();

        let request = &mock.requests()[0];
        assert_eq!(path(request), "/1.1/direct_messages/destroy.json");
        let body = form(request);
        assert_eq!(body["id"], "9");
        assert_eq!(body["include_entities"], "true");
    }

    #[tokio::test]
    async fn test_direct_messages_require_auth() {
        let mock = MockTransport::new();
        let client = anonymous_client(&mock);

        let err = client
            .direct_messages(&DirectMessagesQuery::default())
            .await
            .unwrap_err();
        assert!(matches!(err, TwitterError::AuthenticationRequired));
        assert_eq!(mock.calls(), 0);
    }
}
