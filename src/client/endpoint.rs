//! Request builder shared by every resource module
//!
//! An [`Endpoint`] is the explicit description of one API call: verb, path
//! segments, query pairs, body and the status the operation documents as
//! success. Identifiers only enter a path through [`Endpoint::id`], which
//! percent-escapes them.

use log::warn;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::decode::decode_json;
use super::{ApiResponse, Client, RequestOptions};
use crate::error::{ApiError, HttpError, Result};

/// Builder for a single API call.
#[derive(Debug, Clone)]
pub struct Endpoint {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
    expect: Option<u16>,
}

impl Endpoint {
    fn new(method: Method, base: &str) -> Self {
        Self {
            method,
            path: base.trim_end_matches('/').to_string(),
            query: Vec::new(),
            body: None,
            expect: None,
        }
    }

    /// GET starting at a fixed base path.
    pub fn get(base: &str) -> Self {
        Self::new(Method::GET, base)
    }

    /// POST starting at a fixed base path.
    pub fn post(base: &str) -> Self {
        Self::new(Method::POST, base)
    }

    /// PATCH starting at a fixed base path.
    pub fn patch(base: &str) -> Self {
        Self::new(Method::PATCH, base)
    }

    /// DELETE starting at a fixed base path.
    pub fn delete(base: &str) -> Self {
        Self::new(Method::DELETE, base)
    }

    /// Append a fixed path segment.
    pub fn segment(mut self, segment: &'static str) -> Self {
        self.path.push('/');
        self.path.push_str(segment);
        self
    }

    /// Append a caller-supplied identifier, percent-escaped.
    pub fn id(mut self, id: &str) -> Self {
        self.path.push('/');
        self.path.push_str(&urlencoding::encode(id));
        self
    }

    /// Add a query parameter when the value is present.
    pub fn query<V: ToString>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(v) = value {
            self.query.push((key.to_string(), v.to_string()));
        }
        self
    }

    /// Attach a JSON body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Require this exact success status.
    pub fn expect(mut self, status: u16) -> Self {
        self.expect = Some(status);
        self
    }

    /// The escaped path this endpoint targets.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Dispatch through the client's verb methods.
    ///
    /// Non-2xx statuses fail in the client. A 2xx that differs from the
    /// expected status fails here with the same structured error.
    pub async fn send(self, client: &Client) -> Result<ApiResponse> {
        let options = RequestOptions { query: self.query };

        let response = match self.method {
            Method::GET => client.get(&self.path, options).await?,
            Method::POST => match &self.body {
                Some(body) => client.post_json(&self.path, body, options).await?,
                None => client.post(&self.path, options).await?,
            },
            Method::PATCH => match &self.body {
                Some(body) => client.patch_json(&self.path, body, options).await?,
                None => {
                    return Err(ApiError::Encode(format!("PATCH {} has no body", self.path)).into());
                }
            },
            Method::DELETE => client.delete(&self.path, options).await?,
            ref other => {
                return Err(ApiError::Encode(format!("unsupported method {other}")).into());
            }
        };

        if let Some(expected) = self.expect {
            if response.status != expected {
                warn!(
                    "{} returned {} (expected {})",
                    self.path, response.status, expected
                );
                return Err(ApiError::Http(HttpError::from_body(response.status, &response.body)).into());
            }
        }

        Ok(response)
    }

    /// Dispatch and decode the body into `T`.
    pub async fn fetch<T: DeserializeOwned>(self, client: &Client, context: &str) -> Result<T> {
        let response = self.send(client).await?;
        decode_json(&response.body, context)
    }
}

/// Reject a missing or empty identifier.
pub(crate) fn require_id<'a, E>(value: &'a Option<String>, missing: E) -> std::result::Result<&'a str, E> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(missing),
    }
}

/// Reject a missing field.
pub(crate) fn require<T, E>(value: &Option<T>, missing: E) -> std::result::Result<&T, E> {
    value.as_ref().ok_or(missing)
}
