//
//  twitter-rest
//  api/endpoints/search.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Status and user search.

use std::fmt;

use crate::api::client::{take_field, TwitterClient};
use crate::api::common::Result;
use crate::api::models::{Record, Status, User};
use crate::api::params::Params;

/// Values `result_type` may take. Anything else is not sent.
pub const RESULT_TYPES: [&str; 3] = ["mixed", "popular", "recent"];

/// A search area: centre point plus radius (`"1mi"`, `"5km"`).
#[derive(Debug, Clone, PartialEq)]
pub struct Geocode {
    pub latitude: f64,
    pub longitude: f64,
    pub radius: String,
}

impl fmt::Display for Geocode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.latitude, self.longitude, self.radius)
    }
}

/// Parameters for [`TwitterClient::search`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub term: Option<String>,
    pub geocode: Option<Geocode>,
    pub since_id: Option<u64>,
    pub max_id: Option<u64>,
    /// `YYYY-MM-DD`
    pub until: Option<String>,
    pub count: u32,
    pub lang: Option<String>,
    pub locale: Option<String>,
    pub result_type: Option<String>,
    pub include_entities: bool,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            term: None,
            geocode: None,
            since_id: None,
            max_id: None,
            until: None,
            count: 15,
            lang: None,
            locale: None,
            result_type: Some("mixed".to_string()),
            include_entities: false,
        }
    }
}

impl SearchQuery {
    pub fn term(term: &str) -> Self {
        Self {
            term: Some(term.to_string()),
            ..Default::default()
        }
    }

    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .push_opt("since_id", self.since_id)
            .push_opt("max_id", self.max_id)
            .push_opt("until", self.until.as_deref())
            .push_opt("lang", self.lang.as_deref())
            .push_opt("locale", self.locale.as_deref())
            .push_opt("q", self.term.as_deref())
            .push_opt("geocode", self.geocode.as_ref());
        if self.include_entities {
            params.push("include_entities", 1);
        }
        params.push("count", self.count);
        params.push_opt(
            "result_type",
            self.result_type
                .as_deref()
                .filter(|t| RESULT_TYPES.contains(t)),
        );
        params
    }
}

/// Parameters for [`TwitterClient::users_search`].
#[derive(Debug, Clone, PartialEq)]
pub struct UsersSearchQuery {
    pub page: u32,
    pub count: u32,
    pub include_entities: bool,
}

impl Default for UsersSearchQuery {
    fn default() -> Self {
        Self {
            page: 1,
            count: 20,
            include_entities: false,
        }
    }
}

impl TwitterClient {
    /// Searches recent statuses.
    ///
    /// A query with neither a term nor a geocode returns an empty list
    /// without sending anything.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<Status>> {
        if query.term.is_none() && query.geocode.is_none() {
            return Ok(Vec::new());
        }

        let data = self.get("search/tweets.json", query.to_params()).await?;
        Ok(Status::list_from_value(take_field(data, "statuses")))
    }

    /// Searches user profiles.
    pub async fn users_search(&self, term: &str, query: &UsersSearchQuery) -> Result<Vec<User>> {
        let mut params = Params::new();
        params.push("q", term);
        if query.include_entities {
            params.push("include_entities", 1);
        }
        if query.page > 0 {
            params.push("p", query.page);
        }
        params.push("count", query.count);

        let data = self.get("users/search.json", params).await?;
        Ok(User::list_from_value(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{anonymous_client, path, query, MockTransport};

    #[tokio::test]
    async fn test_empty_search_sends_nothing() {
        let mock = MockTransport::new();
        let client = anonymous_client(&mock);

        let results = client.search(&SearchQuery::default()).await.unwrap();
        assert!(results.is_empty());
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_no_matches_is_empty_list() {
        let mock = MockTransport::new();
        mock.respond(r#"{"statuses": [], "search_metadata": {}}"#);
        let client = anonymous_client(&mock);

        let results = client.search(&SearchQuery::term("nothing")).await.unwrap();
        assert!(results.is_empty());
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn test_search_parameters() {
        let mock = MockTransport::new();
        mock.respond(r#"{"statuses": [{"id": 1, "text": "café"}, {"id": "2"}]}"#);
        let client = anonymous_client(&mock);

        let search = SearchQuery {
            term: Some("café".to_string()),
            geocode: Some(Geocode {
                latitude: 37.781157,
                longitude: -122.398720,
                radius: "1mi".to_string(),
            }),
            since_id: Some(10),
            lang: Some("fr".to_string()),
            include_entities: true,
            ..Default::default()
        };
        let results = client.search(&search).await.unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[1].id, Some(2));

        let request = &mock.requests()[0];
        assert_eq!(path(request), "/1.1/search/tweets.json");
        let params = query(request);
        assert_eq!(params["q"], "café");
        assert_eq!(params["geocode"], "37.781157,-122.39872,1mi");
        assert_eq!(params["since_id"], "10");
        assert_eq!(params["count"], "15");
        assert_eq!(params["result_type"], "mixed");
        assert_eq!(params["include_entities"], "1");
        assert!(!params.contains_key("max_id"));
    }

    #[tokio::test]
    async fn test_unknown_result_type_is_dropped() {
        let mock = MockTransport::new();
        let client = anonymous_client(&mock);

        let search = SearchQuery {
            result_type: Some("latest".to_string()),
            ..SearchQuery::term("rust")
        };
        client.search(&search).await.unwrap();

        assert!(!query(&mock.requests()[0]).contains_key("result_type"));
    }

    #[tokio::test]
    async fn test_users_search() {
        let mock = MockTransport::new();
        mock.respond(r#"[{"id": 12, "screen_name": "jack"}]"#);
        let client = anonymous_client(&mock);

        let users = client
            .users_search("jack", &UsersSearchQuery::default())
            .await
            .unwrap();
        assert_eq!(users[0].screen_name.as_deref(), Some("jack"));

        let params = query(&mock.requests()[0]);
        assert_eq!(params["q"], "jack");
        assert_eq!(params["p"], "1");
        assert_eq!(params["count"], "20");
    }
}
