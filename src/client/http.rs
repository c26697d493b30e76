//! reqwest-backed transport

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};

use super::{ApiRequest, ApiResponse, Transport};
use crate::error::{ApiError, Result};

/// Production API base URL
pub const DEFAULT_API_HOST: &str = "https://api.fastly.com";

/// Header carrying the API token
const API_KEY_HEADER: &str = "Fastly-Key";

/// Transport that talks to the real API over HTTPS.
pub struct ReqwestTransport {
    http: HttpClient,
    base_url: String,
    api_key: String,
}

impl ReqwestTransport {
    /// Create a transport. `api_host` defaults to [`DEFAULT_API_HOST`].
    pub fn new(api_key: String, api_host: Option<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("edgeop/", env!("CARGO_PKG_VERSION"))),
        );

        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .default_headers(headers)
            .build()
            .map_err(ApiError::from)?;

        let base_url = normalize_host(api_host.as_deref().unwrap_or(DEFAULT_API_HOST))?;

        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Trim trailing slashes and require an http(s) scheme.
fn normalize_host(host: &str) -> Result<String> {
    let trimmed = host.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ApiError::InvalidHost(host.to_string()).into());
    }
    Ok(trimmed.to_string())
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, request.path);

        let mut builder = self
            .http
            .request(request.method, &url)
            .header(API_KEY_HEADER, &self.api_key);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(body) = request.body {
            let bytes = serde_json::to_vec(&body).map_err(|e| ApiError::Encode(e.to_string()))?;
            builder = builder.header(CONTENT_TYPE, "application/json").body(bytes);
        }

        let response = builder.send().await.map_err(ApiError::from)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(ApiError::from)?.to_vec();

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_creation_default_host() {
        let transport = ReqwestTransport::new("key".to_string(), None).unwrap();
        assert_eq!(transport.base_url(), DEFAULT_API_HOST);
    }

    #[test]
    fn test_transport_trims_trailing_slash() {
        let transport =
            ReqwestTransport::new("key".to_string(), Some("http://localhost:8080/".to_string()))
                .unwrap();
        assert_eq!(transport.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_transport_rejects_host_without_scheme() {
        let result = ReqwestTransport::new("key".to_string(), Some("api.example.com".to_string()));
        assert!(result.is_err());
    }
}
