//! Sampled requests that tripped signals

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::nested;
use crate::client::decode::{HeaderMultiMap, header_map, optional_timestamp};
use crate::client::endpoint::require_id;
use crate::client::{Client, Collection, Endpoint};
use crate::error::{Result, ValidationError};

const REQUESTS: &str = "requests";

/// A signal attached to a sampled request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestSignal {
    pub id: String,

    /// Where in the request the signal fired (e.g. `QUERYSTRING`)
    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub value: String,

    #[serde(default)]
    pub detector: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    #[serde(rename = "id")]
    pub request_id: String,

    #[serde(default, with = "optional_timestamp", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    #[serde(default)]
    pub method: String,

    #[serde(default)]
    pub scheme: String,

    #[serde(default)]
    pub server_hostname: String,

    #[serde(default)]
    pub server_name: String,

    #[serde(default)]
    pub protocol: String,

    #[serde(default)]
    pub path: String,

    #[serde(default)]
    pub uri: String,

    #[serde(default)]
    pub remote_ip: String,

    #[serde(default)]
    pub remote_hostname: String,

    #[serde(default)]
    pub remote_country_code: String,

    #[serde(default)]
    pub user_agent: String,

    #[serde(default)]
    pub response_code: u16,

    #[serde(default)]
    pub response_size: u64,

    #[serde(default)]
    pub response_millis: u64,

    #[serde(default)]
    pub agent_response_code: u16,

    #[serde(default)]
    pub tls_protocol: String,

    #[serde(default)]
    pub tls_cipher_suite: String,

    #[serde(default, with = "header_map")]
    pub request_headers: HeaderMultiMap,

    #[serde(default, with = "header_map")]
    pub response_headers: HeaderMultiMap,

    #[serde(default)]
    pub signals: Vec<RequestSignal>,
}

#[derive(Debug, Clone, Default)]
pub struct GetInput {
    pub workspace_id: Option<String>,
    pub request_id: Option<String>,
}

/// Search filters. `q` takes the console search syntax
/// (e.g. `signal:SQLI from:-1h`).
#[derive(Debug, Clone, Default)]
pub struct ListInput {
    pub workspace_id: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub q: Option<String>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

pub async fn get(client: &Client, input: &GetInput) -> Result<Request> {
    let endpoint = nested(Endpoint::get, &input.workspace_id, REQUESTS)?;
    let request_id = require_id(&input.request_id, ValidationError::MissingRequestId)?;

    endpoint
        .id(request_id)
        .expect(200)
        .fetch(client, "request")
        .await
}

pub async fn list(client: &Client, input: &ListInput) -> Result<Collection<Request>> {
    nested(Endpoint::get, &input.workspace_id, REQUESTS)?
        .query("from", input.from.as_deref())
        .query("to", input.to.as_deref())
        .query("q", input.q.as_deref())
        .query("limit", input.limit)
        .query("page", input.page)
        .expect(200)
        .fetch(client, "request list")
        .await
}
