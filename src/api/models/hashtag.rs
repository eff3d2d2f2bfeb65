//
//  twitter-rest
//  api/models/hashtag.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use serde::{Deserialize, Serialize};

use super::lenient;

/// A hashtag entity. `text` is the tag body without the leading `#`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashTag {
    #[serde(deserialize_with = "lenient::text")]
    pub text: Option<String>,
}

impl HashTag {
    pub fn new(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Record;
    use serde_json::json;

    #[test]
    fn test_hashtag() {
        let tag = HashTag::from_value(json!({"text": "rustlang", "indices": [0, 9]}));
        assert_eq!(tag, HashTag::new("rustlang"));
        assert_eq!(tag.to_string(), r#"{"text":"rustlang"}"#);
    }
}
