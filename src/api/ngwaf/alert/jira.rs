//! Jira alerts

use serde::{Deserialize, Serialize};

use super::{Integration, IntegrationAlert, alerts, create_integration, get_integration, update_integration};
use crate::client::endpoint::require_id;
use crate::client::{Client, Endpoint};
use crate::error::{Result, ValidationError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JiraConfig {
    /// Jira instance host, e.g. `example.atlassian.net`
    pub host: String,

    /// Jira API token
    pub key: String,

    /// Project key issues are filed under
    pub project: String,

    pub username: String,

    /// Issue type; the server defaults to `task`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_type: Option<String>,
}

impl Integration for JiraConfig {
    const TYPE: &'static str = "jira";
}

pub type JiraAlert = IntegrationAlert<JiraConfig>;

#[derive(Debug, Clone, Default)]
pub struct CreateInput {
    pub workspace_id: Option<String>,
    pub host: Option<String>,
    pub key: Option<String>,
    pub project: Option<String>,
    pub username: Option<String>,
    pub issue_type: Option<String>,
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
    pub host: Option<String>,
    pub key: Option<String>,
    pub project: Option<String>,
    pub username: Option<String>,
    pub issue_type: Option<String>,
    pub events: Option<Vec<String>>,
    pub description: Option<String>,
}

#[derive(Serialize)]
struct ConfigPatch<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    host: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    project: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    issue_type: Option<&'a str>,
}

pub async fn create(client: &Client, input: &CreateInput) -> Result<JiraAlert> {
    let endpoint = alerts(Endpoint::post, &input.workspace_id)?;
    let config = JiraConfig {
        host: require_id(&input.host, ValidationError::MissingHost)?.to_string(),
        key: require_id(&input.key, ValidationError::MissingKey)?.to_string(),
        project: require_id(&input.project, ValidationError::MissingProject)?.to_string(),
        username: require_id(&input.username, ValidationError::MissingUsername)?.to_string(),
        issue_type: input.issue_type.clone(),
    };

    create_integration(client, endpoint, &config, &input.events, &input.description).await
}

pub async fn get(client: &Client, input: &GetInput) -> Result<JiraAlert> {
    get_integration(client, &input.workspace_id, &input.alert_id).await
}

pub async fn update(client: &Client, input: &UpdateInput) -> Result<JiraAlert> {
    let patch = ConfigPatch {
        host: input.host.as_deref(),
        key: input.key.as_deref(),
        project: input.project.as_deref(),
        username: input.username.as_deref(),
        issue_type: input.issue_type.as_deref(),
    };

    update_integration::<JiraConfig, _>(
        client,
        &input.workspace_id,
        &input.alert_id,
        &patch,
        &input.events,
        &input.description,
    )
    .await
}
