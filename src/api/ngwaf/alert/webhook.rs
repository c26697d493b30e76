//! Generic webhook alerts
//!
//! Deliveries are signed; the signing key can be read and rotated.

use serde::{Deserialize, Serialize};

use super::{Integration, IntegrationAlert, alerts, create_integration, get_integration, update_integration};
use crate::client::endpoint::require_id;
use crate::client::{Client, Endpoint};
use crate::error::{Result, ValidationError};

const SIGNING_KEY: &str = "signing-key";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebhookConfig {
    pub webhook: String,
}

impl Integration for WebhookConfig {
    const TYPE: &'static str = "webhook";
}

pub type WebhookAlert = IntegrationAlert<WebhookConfig>;

/// Key used to sign webhook deliveries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SigningKey {
    pub signing_key: String,
}

#[derive(Debug, Clone, Default)]
pub struct CreateInput {
    pub workspace_id: Option<String>,
    pub webhook: Option<String>,
    pub events: Option<Vec<String>>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GetInput {
    pub workspace_id: Option<String>,
    pub alert_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateInput {
    pub workspace_id: Option<String>,
    pub alert_id: Option<String>,
    pub webhook: Option<String>,
    pub events: Option<Vec<String>>,
    pub description: Option<String>,
}

/// Identifies the alert whose signing key is read or rotated.
#[derive(Debug, Clone, Default)]
pub struct SigningKeyInput {
    pub workspace_id: Option<String>,
    pub alert_id: Option<String>,
}

#[derive(Serialize)]
struct ConfigPatch<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    webhook: Option<&'a str>,
}

pub async fn create(client: &Client, input: &CreateInput) -> Result<WebhookAlert> {
    let endpoint = alerts(Endpoint::post, &input.workspace_id)?;
    let config = WebhookConfig {
        webhook: require_id(&input.webhook, ValidationError::MissingWebhook)?.to_string(),
    };

    create_integration(client, endpoint, &config, &input.events, &input.description).await
}

pub async fn get(client: &Client, input: &GetInput) -> Result<WebhookAlert> {
    get_integration(client, &input.workspace_id, &input.alert_id).await
}

pub async fn update(client: &Client, input: &UpdateInput) -> Result<WebhookAlert> {
    let patch = ConfigPatch {
        webhook: input.webhook.as_deref(),
    };

    update_integration::<WebhookConfig, _>(
        client,
        &input.workspace_id,
        &input.alert_id,
        &patch,
        &input.events,
        &input.description,
    )
    .await
}

pub async fn get_signing_key(client: &Client, input: &SigningKeyInput) -> Result<SigningKey> {
    let endpoint = alerts(Endpoint::get, &input.workspace_id)?;
    let alert_id = require_id(&input.alert_id, ValidationError::MissingAlertId)?;

    endpoint
        .id(alert_id)
        .segment(SIGNING_KEY)
        .expect(200)
        .fetch(client, "signing key")
        .await
}

/// Replace the signing key. The old key stops validating immediately.
pub async fn rotate_signing_key(client: &Client, input: &SigningKeyInput) -> Result<SigningKey> {
    let endpoint = alerts(Endpoint::post, &input.workspace_id)?;
    let alert_id = require_id(&input.alert_id, ValidationError::MissingAlertId)?;

    endpoint
        .id(alert_id)
        .segment(SIGNING_KEY)
        .expect(201)
        .fetch(client, "signing key")
        .await
}
