//! JSON output formatting

use chrono::Utc;
use serde::Serialize;

/// Envelope for every JSON document the CLI prints
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub data: T,
    pub meta: Metadata,
}

#[derive(Debug, Serialize)]
pub struct Metadata {
    /// When the output was produced (RFC 3339)
    pub timestamp: String,

    /// CLI version
    pub version: String,
}

impl<T> JsonOutput<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

/// Format data as pretty-printed JSON inside the envelope
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}

/// Result document for delete commands
pub fn format_deleted(kind: &str, id: &str) -> Result<String, serde_json::Error> {
    format_json(&serde_json::json!({ "deleted": true, "type": kind, "id": id }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Entry {
        prefix: &'static str,
        action: &'static str,
    }

    #[test]
    fn test_envelope_carries_version() {
        let output = JsonOutput::new(vec!["acl-1"]);

        assert_eq!(output.data, vec!["acl-1"]);
        assert_eq!(output.meta.version, env!("CARGO_PKG_VERSION"));
        assert!(!output.meta.timestamp.is_empty());
    }

    #[test]
    fn test_format_json_wraps_data() {
        let entries = vec![Entry {
            prefix: "192.0.2.0/24",
            action: "BLOCK",
        }];

        let parsed: serde_json::Value = serde_json::from_str(&format_json(&entries).unwrap()).unwrap();

        assert_eq!(parsed["data"][0]["prefix"], "192.0.2.0/24");
        assert!(parsed["meta"]["timestamp"].is_string());
    }

    #[test]
    fn test_format_json_empty_vec() {
        let entries: Vec<Entry> = vec![];
        assert!(format_json(&entries).unwrap().contains("\"data\": []"));
    }

    #[test]
    fn test_format_deleted() {
        let parsed: serde_json::Value =
            serde_json::from_str(&format_deleted("domain", "d-1").unwrap()).unwrap();

        assert_eq!(parsed["data"]["deleted"], true);
        assert_eq!(parsed["data"]["id"], "d-1");
    }
}
