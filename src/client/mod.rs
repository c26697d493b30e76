//! Shared HTTP client for the management API
//!
//! Every resource module issues its calls through [`Client`]. The client owns
//! a [`Transport`], which is the only component that touches the network.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use reqwest::Method;
use serde::Serialize;

use crate::error::{ApiError, HttpError, Result};

pub mod decode;
pub mod endpoint;
pub mod http;
#[cfg(test)]
pub mod mock;
pub mod pagination;

pub use endpoint::Endpoint;
pub use http::{DEFAULT_API_HOST, ReqwestTransport};
pub use pagination::{Collection, CursorPage, Meta, paginate};

/// A request as handed to the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP verb
    pub method: Method,

    /// Escaped path, starting with `/`
    pub path: String,

    /// Query parameters in insertion order
    pub query: Vec<(String, String)>,

    /// JSON body for write operations
    pub body: Option<serde_json::Value>,
}

/// Status code and raw body of a response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Per-request options accepted by the verb methods.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Query parameters
    pub query: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

/// The network boundary. Implemented over reqwest in production and by
/// in-memory fakes in tests.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request and return whatever the server answered.
    ///
    /// Implementations must not interpret the status code.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// Management API client.
///
/// Cheap to clone; clones share the underlying transport.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}

impl Client {
    /// Create a client for the production API.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_host(api_key, None)
    }

    /// Create a client against a custom API host (for testing or staging).
    pub fn with_host(api_key: impl Into<String>, api_host: Option<String>) -> Result<Self> {
        let transport = ReqwestTransport::new(api_key.into(), api_host)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Create a client over an arbitrary transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Issue a GET.
    pub async fn get(&self, path: &str, options: RequestOptions) -> Result<ApiResponse> {
        self.execute(Method::GET, path, options, None).await
    }

    /// Issue a POST with a JSON body.
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> Result<ApiResponse> {
        let body = encode_body(body)?;
        self.execute(Method::POST, path, options, Some(body)).await
    }

    /// Issue a POST without a body.
    pub async fn post(&self, path: &str, options: RequestOptions) -> Result<ApiResponse> {
        self.execute(Method::POST, path, options, None).await
    }

    /// Issue a PATCH with a JSON body.
    pub async fn patch_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> Result<ApiResponse> {
        let body = encode_body(body)?;
        self.execute(Method::PATCH, path, options, Some(body)).await
    }

    /// Issue a DELETE.
    pub async fn delete(&self, path: &str, options: RequestOptions) -> Result<ApiResponse> {
        self.execute(Method::DELETE, path, options, None).await
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
        body: Option<serde_json::Value>,
    ) -> Result<ApiResponse> {
        debug!("{} {}", method, path);

        let request = ApiRequest {
            method,
            path: path.to_string(),
            query: options.query,
            body,
        };
        let response = self.transport.send(request).await?;

        debug!("{} <- {}", path, response.status);

        if !response.is_success() {
            return Err(ApiError::Http(HttpError::from_body(response.status, &response.body)).into());
        }
        Ok(response)
    }
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<serde_json::Value> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()).into())
}
