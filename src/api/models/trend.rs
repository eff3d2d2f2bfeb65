//
//  twitter-rest
//  api/models/trend.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Trending topic records.

use serde::{Deserialize, Serialize};

use super::lenient;

/// A trending topic.
///
/// Trend objects do not carry their own time. `timestamp` is filled from the
/// enclosing response's `as_of` by the trends endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Trend {
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,

    #[serde(deserialize_with = "lenient::text")]
    pub query: Option<String>,

    /// Epoch seconds.
    #[serde(deserialize_with = "lenient::epoch")]
    pub timestamp: Option<i64>,

    #[serde(deserialize_with = "lenient::text")]
    pub url: Option<String>,
}

impl Trend {
    pub fn with_timestamp(mut self, timestamp: Option<i64>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Record;
    use serde_json::json;

    #[test]
    fn test_trend_ignores_extra_fields() {
        let trend = Trend::from_value(json!({
            "name": "#GanaPuntosSi",
            "query": "%23GanaPuntosSi",
            "url": "http://twitter.com/search/?q=%23GanaPuntosSi",
            "promoted_content": null,
            "events": null
        }))
        .with_timestamp(Some(1393154000));

        assert_eq!(trend.name.as_deref(), Some("#GanaPuntosSi"));
        assert_eq!(trend.timestamp, Some(1393154000));
        assert_eq!(Trend::from_value(trend.to_value()), trend);
    }
}
