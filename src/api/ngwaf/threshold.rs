//! Signal thresholds
//!
//! A threshold takes `action` once `signal` has been seen `limit` times
//! within `interval` seconds, and keeps acting for `duration` seconds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::nested;
use crate::client::decode::optional_timestamp;
use crate::client::endpoint::{require, require_id};
use crate::client::{Client, Collection, Endpoint};
use crate::error::{Result, ValidationError};

const THRESHOLDS: &str = "thresholds";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdAction {
    Block,
    Log,
}

impl std::fmt::Display for ThresholdAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ThresholdAction::Block => "block",
            ThresholdAction::Log => "log",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    #[serde(rename = "id")]
    pub threshold_id: String,

    pub name: String,
    pub action: ThresholdAction,
    pub signal: String,

    #[serde(default)]
    pub dont_notify: bool,

    #[serde(default)]
    pub enabled: bool,

    /// Seconds the action stays in effect
    #[serde(default)]
    pub duration: u32,

    /// Window in seconds
    #[serde(default)]
    pub interval: u32,

    #[serde(default)]
    pub limit: u32,

    #[serde(default, with = "optional_timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateInput {
    #[serde(skip)]
    pub workspace_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ThresholdAction>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dont_notify: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GetInput {
    pub workspace_id: Option<String>,
    pub threshold_id: Option<String>,
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
    pub threshold_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ThresholdAction>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dont_notify: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteInput {
    pub workspace_id: Option<String>,
    pub threshold_id: Option<String>,
}

pub async fn create(client: &Client, input: &CreateInput) -> Result<Threshold> {
    let endpoint = nested(Endpoint::post, &input.workspace_id, THRESHOLDS)?;
    require(&input.action, ValidationError::MissingAction)?;
    require(&input.dont_notify, ValidationError::MissingDontNotify)?;
    require(&input.duration, ValidationError::MissingDuration)?;
    require(&input.enabled, ValidationError::MissingEnabled)?;
    require(&input.interval, ValidationError::MissingInterval)?;
    require(&input.limit, ValidationError::MissingLimit)?;
    require_id(&input.name, ValidationError::MissingName)?;
    require_id(&input.signal, ValidationError::MissingSignal)?;

    endpoint
        .json(input)?
        .expect(201)
        .fetch(client, "threshold")
        .await
}

pub async fn get(client: &Client, input: &GetInput) -> Result<Threshold> {
    let endpoint = nested(Endpoint::get, &input.workspace_id, THRESHOLDS)?;
    let threshold_id = require_id(&input.threshold_id, ValidationError::MissingThresholdId)?;

    endpoint
        .id(threshold_id)
        .expect(200)
        .fetch(client, "threshold")
        .await
}

pub async fn list(client: &Client, input: &ListInput) -> Result<Collection<Threshold>> {
    nested(Endpoint::get, &input.workspace_id, THRESHOLDS)?
        .query("limit", input.limit)
        .query("page", input.page)
        .expect(200)
        .fetch(client, "threshold list")
        .await
}

pub async fn update(client: &Client, input: &UpdateInput) -> Result<Threshold> {
    let endpoint = nested(Endpoint::patch, &input.workspace_id, THRESHOLDS)?;
    let threshold_id = require_id(&input.threshold_id, ValidationError::MissingThresholdId)?;

    endpoint
        .id(threshold_id)
        .json(input)?
        .expect(200)
        .fetch(client, "threshold")
        .await
}

pub async fn delete(client: &Client, input: &DeleteInput) -> Result<()> {
    let endpoint = nested(Endpoint::delete, &input.workspace_id, THRESHOLDS)?;
    let threshold_id = require_id(&input.threshold_id, ValidationError::MissingThresholdId)?;

    endpoint.id(threshold_id).expect(204).send(client).await?;
    Ok(())
}
