//! Virtual patches
//!
//! Patches are provisioned by the platform; a workspace can only toggle them
//! and pick their mode.

use serde::{Deserialize, Serialize};

use super::nested;
use crate::client::endpoint::require_id;
use crate::client::{Client, Collection, Endpoint};
use crate::error::{Result, ValidationError};

const VIRTUAL_PATCHES: &str = "virtual-patches";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchMode {
    Block,
    Log,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualPatch {
    /// Usually the CVE identifier
    #[serde(rename = "id")]
    pub virtual_patch_id: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub enabled: bool,

    pub mode: PatchMode,
}

#[derive(Debug, Clone, Default)]
pub struct GetInput {
    pub workspace_id: Option<String>,
    pub virtual_patch_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ListInput {
    pub workspace_id: Option<String>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateInput {
    #[serde(skip)]
    pub workspace_id: Option<String>,

    #[serde(skip)]
    pub virtual_patch_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<PatchMode>,
}

pub async fn get(client: &Client, input: &GetInput) -> Result<VirtualPatch> {
    let endpoint = nested(Endpoint::get, &input.workspace_id, VIRTUAL_PATCHES)?;
    let patch_id = require_id(&input.virtual_patch_id, ValidationError::MissingVirtualPatchId)?;

    endpoint
        .id(patch_id)
        .expect(200)
        .fetch(client, "virtual patch")
        .await
}

pub async fn list(client: &Client, input: &ListInput) -> Result<Collection<VirtualPatch>> {
    nested(Endpoint::get, &input.workspace_id, VIRTUAL_PATCHES)?
        .query("limit", input.limit)
        .query("page", input.page)
        .expect(200)
        .fetch(client, "virtual patch list")
        .await
}

pub async fn update(client: &Client, input: &UpdateInput) -> Result<VirtualPatch> {
    let endpoint = nested(Endpoint::patch, &input.workspace_id, VIRTUAL_PATCHES)?;
    let patch_id = require_id(&input.virtual_patch_id, ValidationError::MissingVirtualPatchId)?;

    endpoint
        .id(patch_id)
        .json(input)?
        .expect(200)
        .fetch(client, "virtual patch")
        .await
}
