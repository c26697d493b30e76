//! Mailing list alerts

use serde::{Deserialize, Serialize};

use super::{Integration, IntegrationAlert, alerts, create_integration, get_integration, update_integration};
use crate::client::endpoint::require_id;
use crate::client::{Client, Endpoint};
use crate::error::{Result, ValidationError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MailingListConfig {
    pub address: String,
}

impl Integration for MailingListConfig {
    const TYPE: &'static str = "mailinglist";
}

pub type MailingListAlert = IntegrationAlert<MailingListConfig>;

#[derive(Debug, Clone, Default)]
pub struct CreateInput {
    pub workspace_id: Option<String>,
    pub address: Option<String>,
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
    pub address: Option<String>,
    pub events: Option<Vec<String>>,
    pub description: Option<String>,
}

#[derive(Serialize)]
struct ConfigPatch<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<&'a str>,
}

pub async fn create(client: &Client, input: &CreateInput) -> Result<MailingListAlert> {
    let endpoint = alerts(Endpoint::post, &input.workspace_id)?;
    let config = MailingListConfig {
        address: require_id(&input.address, ValidationError::MissingAddress)?.to_string(),
    };

    create_integration(client, endpoint, &config, &input.events, &input.description).await
}

pub async fn get(client: &Client, input: &GetInput) -> Result<MailingListAlert> {
    get_integration(client, &input.workspace_id, &input.alert_id).await
}

pub async fn update(client: &Client, input: &UpdateInput) -> Result<MailingListAlert> {
    let patch = ConfigPatch {
        address: input.address.as_deref(),
    };

    update_integration::<MailingListConfig, _>(
        client,
        &input.workspace_id,
        &input.alert_id,
        &patch,
        &input.events,
        &input.description,
    )
    .await
}
