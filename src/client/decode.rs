//! Response body decoding
//!
//! Bodies decode straight into typed structs with serde. Two field adapters
//! cover the shapes that plain derives can't: timestamps that arrive as empty
//! strings, and header maps whose values are either a string or a list.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};

/// Header name to all of its values.
pub type HeaderMultiMap = BTreeMap<String, Vec<String>>;

/// Decode a JSON body, tagging failures with `context`.
pub fn decode_json<T: DeserializeOwned>(body: &[u8], context: &str) -> Result<T> {
    serde_json::from_slice(body).map_err(|source| {
        ApiError::Decode {
            context: context.to_string(),
            source,
        }
        .into()
    })
}

/// Optional RFC 3339 timestamp; `null`, absent and `""` all mean `None`.
pub mod optional_timestamp {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => DateTime::parse_from_rfc3339(s)
                .map(|dt| Some(dt.with_timezone(&Utc)))
                .map_err(serde::de::Error::custom),
        }
    }

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_some(&dt.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }
}

#[derive(Deserialize, Serialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// Header map whose values are a string or a list of strings.
pub mod header_map {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<HeaderMultiMap, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<BTreeMap<String, OneOrMany>> = Option::deserialize(deserializer)?;
        Ok(raw
            .unwrap_or_default()
            .into_iter()
            .map(|(name, value)| {
                let values = match value {
                    OneOrMany::One(v) => vec![v],
                    OneOrMany::Many(vs) => vs,
                };
                (name, values)
            })
            .collect())
    }

    pub fn serialize<S>(value: &HeaderMultiMap, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        value.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Stamped {
        #[serde(default, with = "optional_timestamp")]
        at: Option<DateTime<Utc>>,
    }

    #[derive(Debug, Deserialize)]
    struct WithHeaders {
        #[serde(default, with = "header_map")]
        headers: HeaderMultiMap,
    }

    #[test]
    fn test_timestamp_parses_rfc3339() {
        let s: Stamped = serde_json::from_str(r#"{"at":"2025-01-15T12:00:00+02:00"}"#).unwrap();
        assert_eq!(s.at.unwrap().to_rfc3339(), "2025-01-15T10:00:00+00:00");
    }

    #[test]
    fn test_timestamp_empty_and_missing() {
        let s: Stamped = serde_json::from_str(r#"{"at":""}"#).unwrap();
        assert!(s.at.is_none());
        let s: Stamped = serde_json::from_str(r#"{"at":null}"#).unwrap();
        assert!(s.at.is_none());
        let s: Stamped = serde_json::from_str(r#"{}"#).unwrap();
        assert!(s.at.is_none());
    }

    #[test]
    fn test_timestamp_rejects_garbage() {
        let result = serde_json::from_str::<Stamped>(r#"{"at":"yesterday"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_header_map_accepts_string_or_list() {
        let h: WithHeaders = serde_json::from_str(
            r#"{"headers":{"Host":"example.com","Accept":["text/html","application/json"]}}"#,
        )
        .unwrap();
        assert_eq!(h.headers["Host"], vec!["example.com"]);
        assert_eq!(h.headers["Accept"].len(), 2);
    }

    #[test]
    fn test_header_map_null() {
        let h: WithHeaders = serde_json::from_str(r#"{"headers":null}"#).unwrap();
        assert!(h.headers.is_empty());
    }

    #[test]
    fn test_decode_json_wraps_context() {
        let err = decode_json::<Stamped>(b"not json", "domain").unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("Failed to decode domain"));
    }
}
