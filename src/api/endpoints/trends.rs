//
//  twitter-rest
//  api/endpoints/trends.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Trending topics.

use serde_json::Value;

use crate::api::client::{take_field, TwitterClient};
use crate::api::common::Result;
use crate::api::models::lenient::as_epoch;
use crate::api::models::{Record, Trend};
use crate::api::params::Params;

/// Yahoo! Where On Earth id for the whole world.
pub const WORLDWIDE_WOEID: u64 = 1;

impl TwitterClient {
    /// Worldwide trending topics.
    pub async fn trends_current(&self, exclude: Option<&str>) -> Result<Vec<Trend>> {
        self.trends_woeid(WORLDWIDE_WOEID, exclude).await
    }

    /// Trending topics for a location.
    ///
    /// Every returned trend carries the response's `as_of` time as its
    /// `timestamp`.
    ///
    /// # Parameters
    ///
    /// * `woeid` - Where On Earth id of the location
    /// * `exclude` - Pass `"hashtags"` to leave hashtags out
    pub async fn trends_woeid(&self, woeid: u64, exclude: Option<&str>) -> Result<Vec<Trend>> {
        let mut params = Params::new();
        params.push("id", woeid).push_opt("exclude", exclude);

        let data = self.get("trends/place.json", params).await?;
        let location = match data {
            Value::Array(mut locations) if !locations.is_empty() => locations.swap_remove(0),
            _ => return Ok(Vec::new()),
        };

        let timestamp = location.get("as_of").and_then(as_epoch);
        Ok(Trend::list_from_value(take_field(location, "trends"))
            .into_iter()
            .map(|trend| trend.with_timestamp(timestamp))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::api::mock::{anonymous_client, query, MockTransport};

    #[tokio::test]
    async fn test_trends_get_envelope_timestamp() {
        let mock = MockTransport::new();
        mock.respond(
            r##"[{
                "as_of": "2014-02-23T11:32:39Z",
                "locations": [{"name": "Worldwide", "woeid": 1}],
                "trends": [
                    {"name": "#rust", "query": "%23rust", "url": "http://twitter.com/search?q=%23rust"},
                    {"name": "Gophers", "query": "Gophers"}
                ]
            }]"##,
        );
        let client = anonymous_client(&mock);

        let trends = client.trends_current(Some("hashtags")).await.unwrap();
        assert_eq!(trends.len(), 2);
        assert!(trends.iter().all(|t| t.timestamp == Some(1393155159)));
        assert_eq!(trends[0].name.as_deref(), Some("#rust"));

        let params = query(&mock.requests()[0]);
        assert_eq!(params["id"], "1");
        assert_eq!(params["exclude"], "hashtags");
    }

    #[tokio::test]
    async fn test_numeric_as_of() {
        let mock = MockTransport::new();
        mock.respond(r#"[{"as_of": 1393155159, "trends": [{"name": "x"}]}]"#);
        let client = anonymous_client(&mock);

        let trends = client.trends_woeid(23424977, None).await.unwrap();
        assert_eq!(trends[0].timestamp, Some(1393155159));
        assert!(!query(&mock.requests()[0]).contains_key("exclude"));
    }

    #[tokio::test]
    async fn test_empty_response_has_no_trends() {
        let mock = MockTransport::new();
        mock.respond("[]");
        let client = anonymous_client(&mock);

        assert!(client.trends_current(None).await.unwrap().is_empty());
    }
}
