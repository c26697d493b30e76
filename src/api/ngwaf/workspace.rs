//! NGWAF workspaces

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::WORKSPACES;
use crate::client::decode::optional_timestamp;
use crate::client::endpoint::{require, require_id};
use crate::client::{Client, Collection, Endpoint};
use crate::error::{Result, ValidationError};

/// How the workspace treats requests that trip a signal threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkspaceMode {
    Block,
    Log,
    Off,
}

impl std::fmt::Display for WorkspaceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            WorkspaceMode::Block => "block",
            WorkspaceMode::Log => "log",
            WorkspaceMode::Off => "off",
        })
    }
}

impl std::str::FromStr for WorkspaceMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "block" => Ok(WorkspaceMode::Block),
            "log" => Ok(WorkspaceMode::Log),
            "off" => Ok(WorkspaceMode::Off),
            other => Err(format!("unknown mode '{other}' (expected block, log or off)")),
        }
    }
}

/// Attack-signal counts that flag an IP within each window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AttackSignalThresholds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_minute: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ten_minutes: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_hour: Option<u32>,

    /// Block on the first attack signal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub immediate: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    #[serde(rename = "id")]
    pub workspace_id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    pub mode: WorkspaceMode,

    #[serde(default)]
    pub attack_signal_thresholds: AttackSignalThresholds,

    /// `"hashed"` when client IPs are anonymised
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_anonymization: Option<String>,

    #[serde(default)]
    pub client_ip_headers: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_blocking_response_code: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_redirect_url: Option<String>,

    #[serde(default, with = "optional_timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<WorkspaceMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attack_signal_thresholds: Option<AttackSignalThresholds>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_anonymization: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_ip_headers: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_blocking_response_code: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_redirect_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GetInput {
    pub workspace_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ListInput {
    pub limit: Option<u32>,
    pub mode: Option<WorkspaceMode>,
    pub page: Option<u32>,
}

/// Partial update; `None` fields are left as they are.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateInput {
    #[serde(skip)]
    pub workspace_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<WorkspaceMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attack_signal_thresholds: Option<AttackSignalThresholds>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_anonymization: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_ip_headers: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_blocking_response_code: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_redirect_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteInput {
    pub workspace_id: Option<String>,
}

pub async fn create(client: &Client, input: &CreateInput) -> Result<Workspace> {
    require_id(&input.name, ValidationError::MissingName)?;
    require(&input.description, ValidationError::MissingDescription)?;
    require(&input.mode, ValidationError::MissingMode)?;

    Endpoint::post(WORKSPACES)
        .json(input)?
        .expect(201)
        .fetch(client, "workspace")
        .await
}

pub async fn get(client: &Client, input: &GetInput) -> Result<Workspace> {
    let workspace_id = require_id(&input.workspace_id, ValidationError::MissingWorkspaceId)?;

    Endpoint::get(WORKSPACES)
        .id(workspace_id)
        .expect(200)
        .fetch(client, "workspace")
        .await
}

pub async fn list(client: &Client, input: &ListInput) -> Result<Collection<Workspace>> {
    Endpoint::get(WORKSPACES)
        .query("limit", input.limit)
        .query("mode", input.mode)
        .query("page", input.page)
        .expect(200)
        .fetch(client, "workspace list")
        .await
}

pub async fn update(client: &Client, input: &UpdateInput) -> Result<Workspace> {
    let workspace_id = require_id(&input.workspace_id, ValidationError::MissingWorkspaceId)?;

    Endpoint::patch(WORKSPACES)
        .id(workspace_id)
        .json(input)?
        .expect(200)
        .fetch(client, "workspace")
        .await
}

pub async fn delete(client: &Client, input: &DeleteInput) -> Result<()> {
    let workspace_id = require_id(&input.workspace_id, ValidationError::MissingWorkspaceId)?;

    Endpoint::delete(WORKSPACES)
        .id(workspace_id)
        .expect(204)
        .send(client)
        .await?;
    Ok(())
}
