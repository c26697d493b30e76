//! Next-Gen WAF (NGWAF) v1
//!
//! Workspaces are the container for every other NGWAF resource; nested
//! resources live under `/ngwaf/v1/workspaces/{workspace_id}/...`.

pub mod alert;
pub mod list;
pub mod request;
pub mod signal;
pub mod threshold;
pub mod virtual_patch;
pub mod workspace;

use crate::client::Endpoint;
use crate::client::endpoint::require_id;
use crate::error::{Result, ValidationError};

pub(crate) const WORKSPACES: &str = "/ngwaf/v1/workspaces";

/// Start a nested endpoint: `/ngwaf/v1/workspaces/{workspace_id}/{collection}`.
pub(crate) fn nested(
    endpoint: fn(&str) -> Endpoint,
    workspace_id: &Option<String>,
    collection: &'static str,
) -> Result<Endpoint> {
    let workspace_id = require_id(workspace_id, ValidationError::MissingWorkspaceId)?;
    Ok(endpoint(WORKSPACES).id(workspace_id).segment(collection))
}
