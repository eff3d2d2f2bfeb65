//
//  twitter-rest
//  api/models/url.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use serde::{Deserialize, Serialize};

use super::lenient;

/// A link found in a status: the shortened `t.co` form and its target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Url {
    #[serde(deserialize_with = "lenient::text")]
    pub url: Option<String>,

    #[serde(deserialize_with = "lenient::text")]
    pub expanded_url: Option<String>,
}

impl Url {
    pub fn new(url: &str, expanded_url: &str) -> Self {
        Self {
            url: Some(url.to_string()),
            expanded_url: Some(expanded_url.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Record;
    use serde_json::{json, Value};

    #[test]
    fn test_url_round_trip() {
        let url = Url::new("http://t.co/x", "http://example.com/");
        let encoded: Value = serde_json::from_str(&url.to_json().unwrap()).unwrap();
        assert_eq!(encoded, json!({"url": "http://t.co/x", "expanded_url": "http://example.com/"}));
        assert_eq!(Url::from_value(url.to_value()), url);
    }
}
