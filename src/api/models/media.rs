//
//  twitter-rest
//  api/models/media.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Uploaded media handles returned by the upload endpoint.

use serde::{Deserialize, Serialize};

use super::lenient;

/// An uploaded media item, referenced later through `media_ids`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Media {
    #[serde(deserialize_with = "lenient::unsigned")]
    pub media_id: Option<u64>,

    #[serde(deserialize_with = "lenient::unsigned")]
    pub size: Option<u64>,

    #[serde(deserialize_with = "lenient::unsigned")]
    pub expires_after_secs: Option<u64>,

    #[serde(deserialize_with = "lenient::object")]
    pub image: Option<MediaImage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaImage {
    #[serde(deserialize_with = "lenient::text")]
    pub image_type: Option<String>,

    #[serde(deserialize_with = "lenient::unsigned")]
    pub w: Option<u64>,

    #[serde(deserialize_with = "lenient::unsigned")]
    pub h: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Record;
    use serde_json::json;

    #[test]
    fn test_upload_response() {
        let media = Media::from_value(json!({
            "media_id": 553639437322563584u64,
            "media_id_string": "553639437322563584",
            "size": 998865,
            "image": {"w": 2234, "h": 1873, "image_type": "image/jpeg"}
        }));
        assert_eq!(media.media_id, Some(553639437322563584));
        assert_eq!(media.image.as_ref().and_then(|i| i.w), Some(2234));
        assert_eq!(Media::from_value(media.to_value()), media);
    }
}
