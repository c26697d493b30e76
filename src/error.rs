//! Error types for the edgeop SDK and CLI

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for edgeop operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

impl Error {
    /// Whether this is a remote 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api(ApiError::Http(e)) if e.is_not_found())
    }

    /// The structured remote error, if this is one.
    pub fn http(&self) -> Option<&HttpError> {
        match self {
            Error::Api(ApiError::Http(e)) => Some(e),
            _ => None,
        }
    }
}

/// A required input field was not set. Returned before any request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field 'access_key_id'")]
    MissingAccessKeyId,

    #[error("missing required field 'acl_id'")]
    MissingAclId,

    #[error("missing required field 'action'")]
    MissingAction,

    #[error("missing required field 'address'")]
    MissingAddress,

    #[error("missing required field 'alert_id'")]
    MissingAlertId,

    #[error("missing required field 'description'")]
    MissingDescription,

    #[error("missing required field 'domain_id'")]
    MissingDomainId,

    #[error("missing required field 'dont_notify'")]
    MissingDontNotify,

    #[error("missing required field 'duration'")]
    MissingDuration,

    #[error("missing required field 'enabled'")]
    MissingEnabled,

    #[error("missing required field 'entries'")]
    MissingEntries,

    #[error("missing required field 'events'")]
    MissingEvents,

    #[error("missing required field 'fqdn'")]
    MissingFqdn,

    #[error("missing required field 'host'")]
    MissingHost,

    #[error("missing required field 'interval'")]
    MissingInterval,

    #[error("missing required field 'ip'")]
    MissingIp,

    #[error("missing required field 'key'")]
    MissingKey,

    #[error("missing required field 'limit'")]
    MissingLimit,

    #[error("missing required field 'list_id'")]
    MissingListId,

    #[error("missing required field 'mode'")]
    MissingMode,

    #[error("missing required field 'name'")]
    MissingName,

    #[error("missing required field 'permission'")]
    MissingPermission,

    #[error("missing required field 'project'")]
    MissingProject,

    #[error("missing required field 'request_id'")]
    MissingRequestId,

    #[error("missing required field 'signal'")]
    MissingSignal,

    #[error("missing required field 'signal_id'")]
    MissingSignalId,

    #[error("missing required field 'site'")]
    MissingSite,

    #[error("missing required field 'threshold_id'")]
    MissingThresholdId,

    #[error("missing required field 'type'")]
    MissingType,

    #[error("missing required field 'username'")]
    MissingUsername,

    #[error("missing required field 'virtual_patch_id'")]
    MissingVirtualPatchId,

    #[error("missing required field 'webhook'")]
    MissingWebhook,

    #[error("missing required field 'workspace_id'")]
    MissingWorkspaceId,
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("Failed to decode {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode request body: {0}")]
    Encode(String),

    #[error("Alert {alert_id} is a '{actual}' integration, not '{expected}'")]
    AlertTypeMismatch {
        alert_id: String,
        expected: String,
        actual: String,
    },

    #[error("Invalid API host '{0}'")]
    InvalidHost(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Structured error built from a non-success response.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{}", self.render())]
pub struct HttpError {
    /// HTTP status code
    pub status: u16,

    /// Detail messages reported by the API
    pub errors: Vec<ErrorDetail>,
}

/// A single detail message from an error response body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Every error body shape the API uses, parsed in one pass.
#[derive(Deserialize)]
struct ErrorBody {
    /// JSON:API detail list, also present on some problem documents
    #[serde(default)]
    errors: Vec<ErrorDetail>,

    /// RFC 7807 title, or the legacy `msg`
    #[serde(default, alias = "msg")]
    title: Option<String>,

    #[serde(default)]
    detail: Option<String>,
}

impl ErrorDetail {
    fn is_empty(&self) -> bool {
        self.id.is_none() && self.code.is_none() && self.title.is_none() && self.detail.is_none()
    }
}

impl HttpError {
    /// Build an error from a status code and raw response body.
    ///
    /// Understands JSON:API `errors` arrays, RFC 7807 problem documents and
    /// the legacy `{"msg", "detail"}` shape. A top-level title/detail comes
    /// first, followed by the non-empty entries of `errors`. A body yielding
    /// no message becomes a single detail holding the body text.
    pub fn from_body(status: u16, body: &[u8]) -> Self {
        let mut errors = Vec::new();

        if let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) {
            if parsed.title.is_some() || parsed.detail.is_some() {
                errors.push(ErrorDetail {
                    title: parsed.title,
                    detail: parsed.detail,
                    ..Default::default()
                });
            }
            errors.extend(parsed.errors.into_iter().filter(|e| !e.is_empty()));
        }

        if errors.is_empty() {
            let text = String::from_utf8_lossy(body).trim().to_string();
            if !text.is_empty() {
                errors.push(ErrorDetail {
                    detail: Some(text),
                    ..Default::default()
                });
            }
        }

        Self { status, errors }
    }

    /// Whether the remote reported 404.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    fn render(&self) -> String {
        let mut out = format!("HTTP {}", self.status);
        for e in &self.errors {
            let msg = match (&e.title, &e.detail) {
                (Some(t), Some(d)) => format!("{t} ({d})"),
                (Some(t), None) => t.clone(),
                (None, Some(d)) => d.clone(),
                (None, None) => continue,
            };
            out.push_str(": ");
            out.push_str(&msg);
        }
        out
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `edgeop init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("API key not configured. Run `edgeop init` to set up your API key.")]
    MissingApiKey,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
