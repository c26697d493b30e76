//! Workspace alerts
//!
//! Every alert is bound to one integration (Slack, Jira, ...) whose `config`
//! shape depends on the integration type. The untyped [`Alert`] covers
//! get/list/delete for any type. Each integration module offers typed
//! create, get and update built on [`IntegrationAlert`]. Typed get and update
//! read the stored alert first and refuse to act on another integration type.

pub mod datadog;
pub mod jira;
pub mod mailinglist;
pub mod microsoftteams;
pub mod opsgenie;
pub mod pagerduty;
pub mod slack;
pub mod webhook;

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::nested;
use crate::client::decode::optional_timestamp;
use crate::client::endpoint::require_id;
use crate::client::{Client, Collection, Endpoint};
use crate::error::{ApiError, Result, ValidationError};

const ALERTS: &str = "alerts";

/// Config payload of one integration type.
pub trait Integration: Serialize + DeserializeOwned {
    /// Value of the alert's `type` field
    const TYPE: &'static str;
}

/// An alert of any integration type, with its config left as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(rename = "id")]
    pub alert_id: String,

    #[serde(rename = "type")]
    pub integration_type: String,

    #[serde(default)]
    pub config: serde_json::Value,

    #[serde(default)]
    pub events: Vec<String>,

    #[serde(default)]
    pub description: String,

    #[serde(default, with = "optional_timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub created_by: String,
}

/// An alert whose config has been decoded as integration `C`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "C: Integration")]
pub struct IntegrationAlert<C> {
    #[serde(rename = "id")]
    pub alert_id: String,

    pub config: C,

    #[serde(default)]
    pub events: Vec<String>,

    #[serde(default)]
    pub description: String,

    #[serde(default, with = "optional_timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub created_by: String,
}

impl Alert {
    /// Reinterpret as integration `C`, checking the stored type.
    pub fn into_integration<C: Integration>(self) -> Result<IntegrationAlert<C>> {
        check_type::<C>(&self)?;

        let config = serde_json::from_value(self.config).map_err(|source| ApiError::Decode {
            context: format!("{} alert config", C::TYPE),
            source,
        })?;

        Ok(IntegrationAlert {
            alert_id: self.alert_id,
            config,
            events: self.events,
            description: self.description,
            created_at: self.created_at,
            created_by: self.created_by,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetInput {
    pub workspace_id: Option<String>,
    pub alert_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ListInput {
    pub workspace_id: Option<String>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteInput {
    pub workspace_id: Option<String>,
    pub alert_id: Option<String>,
}

pub async fn get(client: &Client, input: &GetInput) -> Result<Alert> {
    let endpoint = nested(Endpoint::get, &input.workspace_id, ALERTS)?;
    let alert_id = require_id(&input.alert_id, ValidationError::MissingAlertId)?;

    endpoint
        .id(alert_id)
        .expect(200)
        .fetch(client, "alert")
        .await
}

pub async fn list(client: &Client, input: &ListInput) -> Result<Collection<Alert>> {
    nested(Endpoint::get, &input.workspace_id, ALERTS)?
        .query("limit", input.limit)
        .query("page", input.page)
        .expect(200)
        .fetch(client, "alert list")
        .await
}

pub async fn delete(client: &Client, input: &DeleteInput) -> Result<()> {
    let endpoint = nested(Endpoint::delete, &input.workspace_id, ALERTS)?;
    let alert_id = require_id(&input.alert_id, ValidationError::MissingAlertId)?;

    endpoint.id(alert_id).expect(204).send(client).await?;
    Ok(())
}

#[derive(Serialize)]
struct AlertBody<'a, C> {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    integration_type: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<&'a C>,

    #[serde(skip_serializing_if = "Option::is_none")]
    events: Option<&'a [String]>,

    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

fn check_type<C: Integration>(alert: &Alert) -> Result<()> {
    if alert.integration_type == C::TYPE {
        return Ok(());
    }
    warn!(
        "Alert {} is '{}', refusing '{}' operation",
        alert.alert_id,
        alert.integration_type,
        C::TYPE
    );
    Err(ApiError::AlertTypeMismatch {
        alert_id: alert.alert_id.clone(),
        expected: C::TYPE.to_string(),
        actual: alert.integration_type.clone(),
    }
    .into())
}

/// Alerts endpoint for a workspace, checked for a workspace id.
pub(crate) fn alerts(method: fn(&str) -> Endpoint, workspace_id: &Option<String>) -> Result<Endpoint> {
    nested(method, workspace_id, ALERTS)
}

/// POST a new alert of type `C`. `events` must be present and non-empty.
pub(crate) async fn create_integration<C: Integration>(
    client: &Client,
    endpoint: Endpoint,
    config: &C,
    events: &Option<Vec<String>>,
    description: &Option<String>,
) -> Result<IntegrationAlert<C>> {
    let events = match events {
        Some(e) if !e.is_empty() => e,
        _ => return Err(ValidationError::MissingEvents.into()),
    };

    let body = AlertBody {
        integration_type: Some(C::TYPE),
        config: Some(config),
        events: Some(events.as_slice()),
        description: description.as_deref(),
    };

    endpoint
        .json(&body)?
        .expect(201)
        .fetch(client, &format!("{} alert", C::TYPE))
        .await
}

/// GET an alert and decode it as type `C`.
pub(crate) async fn get_integration<C: Integration>(
    client: &Client,
    workspace_id: &Option<String>,
    alert_id: &Option<String>,
) -> Result<IntegrationAlert<C>> {
    let alert = get(
        client,
        &GetInput {
            workspace_id: workspace_id.clone(),
            alert_id: alert_id.clone(),
        },
    )
    .await?;
    alert.into_integration()
}

/// PATCH an alert of type `C` after confirming the stored type matches.
///
/// `config` holds only the fields to change; an all-`None` config is left
/// out of the body.
pub(crate) async fn update_integration<C: Integration, U: Serialize>(
    client: &Client,
    workspace_id: &Option<String>,
    alert_id: &Option<String>,
    config: &U,
    events: &Option<Vec<String>>,
    description: &Option<String>,
) -> Result<IntegrationAlert<C>> {
    let endpoint = alerts(Endpoint::patch, workspace_id)?;
    let id = require_id(alert_id, ValidationError::MissingAlertId)?;

    let current = get(
        client,
        &GetInput {
            workspace_id: workspace_id.clone(),
            alert_id: alert_id.clone(),
        },
    )
    .await?;
    check_type::<C>(&current)?;

    let config = serde_json::to_value(config).map_err(|e| ApiError::Encode(e.to_string()))?;
    let config_changed = config.as_object().is_some_and(|o| !o.is_empty());
    debug!("Updating {} alert {} (config changed: {})", C::TYPE, id, config_changed);

    let body = AlertBody {
        integration_type: None,
        config: config_changed.then_some(&config),
        events: events.as_deref(),
        description: description.as_deref(),
    };

    endpoint
        .id(id)
        .json(&body)?
        .expect(200)
        .fetch(client, &format!("{} alert", C::TYPE))
        .await
}
