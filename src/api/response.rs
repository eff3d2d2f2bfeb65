//
//  twitter-rest
//  api/response.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Response parsing and error-envelope detection.
//!
//! Every body returned by the transport passes through [`parse_and_check`]
//! before any record is built from it.

use serde_json::Value;

use super::common::{RemoteError, Result};

const OVER_CAPACITY_TITLE: &str = "<title>Twitter / Over capacity</title>";
const ERROR_TITLE: &str = "<title>Twitter / Error</title>";

/// Decodes a response body and surfaces Twitter-reported errors.
///
/// # Parameters
///
/// * `body` - The raw response body
///
/// # Returns
///
/// The decoded JSON value when it is neither an outage page nor an error
/// envelope.
///
/// # Errors
///
/// | Body | Error |
/// |------|-------|
/// | HTML with the "Over capacity" title | [`RemoteError::OverCapacity`] |
/// | Any other HTML page with a `<title>` | [`RemoteError::TechnicalError`] |
/// | Anything else that is not JSON | [`RemoteError::InvalidPayload`] |
/// | JSON object with `error` or `errors` | [`RemoteError::Api`] |
///
/// # Example
///
/// ```rust
/// use twitter_rest::api::common::{RemoteError, TwitterError};
/// use twitter_rest::api::response::parse_and_check;
///
/// let value = parse_and_check(r#"{"statuses": []}"#).unwrap();
/// assert!(value["statuses"].as_array().unwrap().is_empty());
///
/// match parse_and_check(r#"{"error": "Invalid token"}"#) {
///     Err(TwitterError::Remote(RemoteError::Api { message, .. })) => {
///         assert_eq!(message, "Invalid token");
///     }
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
pub fn parse_and_check(body: &str) -> Result<Value> {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(err) => return Err(classify_non_json(body, err).into()),
    };

    if let Some(remote) = error_envelope(&value) {
        return Err(remote.into());
    }

    Ok(value)
}

fn classify_non_json(body: &str, err: serde_json::Error) -> RemoteError {
    if body.contains(OVER_CAPACITY_TITLE) {
        RemoteError::OverCapacity
    } else if body.contains(ERROR_TITLE) || looks_like_html_page(body) {
        RemoteError::TechnicalError
    } else {
        RemoteError::InvalidPayload(err.to_string())
    }
}

fn looks_like_html_page(body: &str) -> bool {
    let lower = body.to_ascii_lowercase();
    lower.contains("<html") && lower.contains("<title>")
}

/// Extracts the error envelope, if the value carries one.
///
/// Twitter uses three shapes:
///
/// ```json
/// {"error": "Invalid token"}
/// {"errors": [{"code": 34, "message": "Sorry, that page does not exist"}]}
/// {"errors": "Rate limit exceeded"}
/// ```
fn error_envelope(value: &Value) -> Option<RemoteError> {
    let object = value.as_object()?;

    if let Some(error) = object.get("error") {
        return Some(RemoteError::Api {
            message: message_text(error),
            codes: Vec::new(),
        });
    }

    let errors = object.get("errors")?;
    let (message, codes) = match errors {
        Value::Array(entries) => {
            let messages: Vec<String> = entries.iter().map(message_text).collect();
            let codes = entries
                .iter()
                .filter_map(|e| e.get("code").and_then(Value::as_i64))
                .collect();
            (messages.join("; "), codes)
        }
        other => (message_text(other), Vec::new()),
    };

    Some(RemoteError::Api { message, codes })
}

fn message_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => match map.get("message") {
            Some(Value::String(s)) => s.clone(),
            _ => value.to_string(),
        },
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::TwitterError;

    fn remote(body: &str) -> RemoteError {
        match parse_and_check(body) {
            Err(TwitterError::Remote(remote)) => remote,
            other => panic!("expected remote error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_search_is_not_an_error() {
        let value = parse_and_check(r#"{"statuses": [], "search_metadata": {}}"#).unwrap();
        assert_eq!(value["statuses"], serde_json::json!([]));
    }

    #[test]
    fn test_plain_error_message() {
        assert_eq!(
            remote(r#"{"error": "Invalid token"}"#),
            RemoteError::Api {
                message: "Invalid token".to_string(),
                codes: vec![],
            }
        );
    }

    #[test]
    fn test_errors_array_keeps_messages_and_codes() {
        let err = remote(
            r#"{"errors":[{"message":"Rate limit exceeded","code":88},{"message":"Over","code":130}]}"#,
        );
        assert_eq!(
            err,
            RemoteError::Api {
                message: "Rate limit exceeded; Over".to_string(),
                codes: vec![88, 130],
            }
        );
    }

    #[test]
    fn test_errors_string() {
        assert_eq!(
            remote(r#"{"errors": "Something broke"}"#),
            RemoteError::Api {
                message: "Something broke".to_string(),
                codes: vec![],
            }
        );
    }

    #[test]
    fn test_over_capacity_page() {
        let body = "<html><head><title>Twitter / Over capacity</title></head><body>whale</body></html>";
        assert_eq!(remote(body), RemoteError::OverCapacity);
    }

    #[test]
    fn test_technical_error_page() {
        let body = "<html><head><title>Twitter / Error</title></head></html>";
        assert_eq!(remote(body), RemoteError::TechnicalError);

        let body = "<HTML><HEAD><TITLE>502 Bad Gateway</TITLE></HEAD></HTML>";
        assert_eq!(remote(body), RemoteError::TechnicalError);
    }

    #[test]
    fn test_garbage_is_invalid_payload() {
        assert!(matches!(remote("not json"), RemoteError::InvalidPayload(_)));
        assert!(matches!(remote(""), RemoteError::InvalidPayload(_)));
    }

    #[test]
    fn test_arrays_pass_through() {
        let value = parse_and_check(r#"[{"id": 1}, {"id": 2}]"#).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
    }
}
