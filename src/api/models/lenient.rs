//
//  twitter-rest
//  api/models/lenient.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Tolerant field coercion for record deserialization.
//!
//! Twitter's payloads drift: ids arrive as numbers or numeric strings, flags
//! as booleans, `0`/`1` or `"true"`, and embedded objects are sometimes
//! replaced by `null` or a bare id. Each helper here is used as a serde
//! `deserialize_with` function and maps anything it cannot interpret to
//! `None` instead of failing, so building a record never errors.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Twitter's wire date format, e.g. `Sun Feb 23 11:32:39 +0000 2014`.
pub const TWITTER_DATE_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

fn raw<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Value, D::Error> {
    Value::deserialize(deserializer)
}

/// Non-negative integers: ids and counts.
pub fn unsigned<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(as_unsigned(&raw(deserializer)?))
}

pub fn signed<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match raw(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Tri-state flags.
pub fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match raw(deserializer)? {
        Value::Bool(b) => Some(b),
        Value::Number(n) => n.as_i64().map(|n| n != 0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match raw(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// An embedded record; anything but an object becomes `None`.
pub fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match raw(deserializer)? {
        value @ Value::Object(_) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

/// A boxed embedded record.
pub fn boxed<'de, D, T>(deserializer: D) -> Result<Option<Box<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    object(deserializer).map(|value| value.map(Box::new))
}

/// A list of embedded records; non-object entries are skipped.
pub fn records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match raw(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// Epoch seconds from a number, a numeric string, a Twitter wire date or an
/// RFC 3339 timestamp.
pub fn epoch<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(as_epoch(&raw(deserializer)?))
}

pub fn as_unsigned(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn as_epoch(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => parse_timestamp(s),
        _ => None,
    }
}

/// Parses a timestamp string into epoch seconds.
///
/// # Example
///
/// ```rust
/// use twitter_rest::api::models::lenient::parse_timestamp;
///
/// assert_eq!(parse_timestamp("Sun Feb 23 11:32:39 +0000 2014"), Some(1393155159));
/// assert_eq!(parse_timestamp("2014-02-23T11:32:39Z"), Some(1393155159));
/// assert_eq!(parse_timestamp("1393155159"), Some(1393155159));
/// assert_eq!(parse_timestamp("yesterday"), None);
/// ```
pub fn parse_timestamp(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(seconds) = raw.parse::<i64>() {
        return Some(seconds);
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, TWITTER_DATE_FORMAT) {
        return Some(dt.timestamp());
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).timestamp())
}

/// Serialization predicate: skip `None` and empty strings.
pub fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

/// Drops `Null` members and empty strings from a JSON object, recursively.
pub(crate) fn sparse(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null() && v.as_str() != Some(""))
                .map(|(k, v)| (k, sparse(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(sparse).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Probe {
        #[serde(deserialize_with = "unsigned")]
        id: Option<u64>,
        #[serde(deserialize_with = "flag")]
        on: Option<bool>,
        #[serde(deserialize_with = "text")]
        name: Option<String>,
        #[serde(deserialize_with = "epoch")]
        at: Option<i64>,
    }

    fn probe(value: Value) -> Probe {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_ids_from_numbers_and_strings() {
        assert_eq!(probe(json!({"id": 9007199254740993u64})).id, Some(9007199254740993));
        assert_eq!(probe(json!({"id": "436918574582439936"})).id, Some(436918574582439936));
        assert_eq!(probe(json!({"id": "abc"})).id, None);
        assert_eq!(probe(json!({"id": -3})).id, None);
        assert_eq!(probe(json!({"id": null})).id, None);
    }

    #[test]
    fn test_flags_are_tri_state() {
        assert_eq!(probe(json!({"on": true})).on, Some(true));
        assert_eq!(probe(json!({"on": 0})).on, Some(false));
        assert_eq!(probe(json!({"on": "true"})).on, Some(true));
        assert_eq!(probe(json!({"on": "maybe"})).on, None);
        assert_eq!(probe(json!({})).on, None);
    }

    #[test]
    fn test_wrong_shapes_become_none() {
        let p = probe(json!({"name": {"nested": true}, "at": [1]}));
        assert_eq!(p.name, None);
        assert_eq!(p.at, None);
    }

    #[test]
    fn test_sparse_drops_null_and_empty() {
        let value = sparse(json!({"a": null, "b": "", "c": "x", "d": {"e": null, "f": 0}}));
        assert_eq!(value, json!({"c": "x", "d": {"f": 0}}));
    }
}
