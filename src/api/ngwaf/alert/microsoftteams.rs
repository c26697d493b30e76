//! Microsoft Teams alerts

use serde::{Deserialize, Serialize};

use super::{Integration, IntegrationAlert, alerts, create_integration, get_integration, update_integration};
use crate::client::endpoint::require_id;
use crate::client::{Client, Endpoint};
use crate::error::{Result, ValidationError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MicrosoftTeamsConfig {
    pub webhook: String,
}

impl Integration for MicrosoftTeamsConfig {
    const TYPE: &'static str = "microsoftteams";
}

pub type MicrosoftTeamsAlert = IntegrationAlert<MicrosoftTeamsConfig>;

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

#[derive(Serialize)]
struct ConfigPatch<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    webhook: Option<&'a str>,
}

pub async fn create(client: &Client, input: &CreateInput) -> Result<MicrosoftTeamsAlert> {
    let endpoint = alerts(Endpoint::post, &input.workspace_id)?;
    let config = MicrosoftTeamsConfig {
        webhook: require_id(&input.webhook, ValidationError::MissingWebhook)?.to_string(),
    };

    create_integration(client, endpoint, &config, &input.events, &input.description).await
}

pub async fn get(client: &Client, input: &GetInput) -> Result<MicrosoftTeamsAlert> {
    get_integration(client, &input.workspace_id, &input.alert_id).await
}

pub async fn update(client: &Client, input: &UpdateInput) -> Result<MicrosoftTeamsAlert> {
    let patch = ConfigPatch {
        webhook: input.webhook.as_deref(),
    };

    update_integration::<MicrosoftTeamsConfig, _>(
        client,
        &input.workspace_id,
        &input.alert_id,
        &patch,
        &input.events,
        &input.description,
    )
    .await
}
