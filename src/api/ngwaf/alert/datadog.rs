//! Datadog alerts

use serde::{Deserialize, Serialize};

use super::{Integration, IntegrationAlert, alerts, create_integration, get_integration, update_integration};
use crate::client::endpoint::require_id;
use crate::client::{Client, Endpoint};
use crate::error::{Result, ValidationError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatadogConfig {
    /// Datadog API key
    pub key: String,

    /// Datadog site, e.g. `us1` or `eu1`
    pub site: String,
}

impl Integration for DatadogConfig {
    const TYPE: &'static str = "datadog";
}

pub type DatadogAlert = IntegrationAlert<DatadogConfig>;

#[derive(Debug, Clone, Default)]
pub struct CreateInput {
    pub workspace_id: Option<String>,
    pub key: Option<String>,
    pub site: Option<String>,
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
    pub key: Option<String>,
    pub site: Option<String>,
    pub events: Option<Vec<String>>,
    pub description: Option<String>,
}

#[derive(Serialize)]
struct ConfigPatch<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    site: Option<&'a str>,
}

pub async fn create(client: &Client, input: &CreateInput) -> Result<DatadogAlert> {
    let endpoint = alerts(Endpoint::post, &input.workspace_id)?;
    let config = DatadogConfig {
        key: require_id(&input.key, ValidationError::MissingKey)?.to_string(),
        site: require_id(&input.site, ValidationError::MissingSite)?.to_string(),
    };

    create_integration(client, endpoint, &config, &input.events, &input.description).await
}

pub async fn get(client: &Client, input: &GetInput) -> Result<DatadogAlert> {
    get_integration(client, &input.workspace_id, &input.alert_id).await
}

pub async fn update(client: &Client, input: &UpdateInput) -> Result<DatadogAlert> {
    let patch = ConfigPatch {
        key: input.key.as_deref(),
        site: input.site.as_deref(),
    };

    update_integration::<DatadogConfig, _>(
        client,
        &input.workspace_id,
        &input.alert_id,
        &patch,
        &input.events,
        &input.description,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockTransport;
    use crate::error::Error;

    #[tokio::test]
    async fn test_create_requires_key_then_site() {
        let mock = MockTransport::new();
        let client = mock.client();

        let mut input = CreateInput {
            workspace_id: Some("ws-1".to_string()),
            events: Some(vec!["flag".to_string()]),
            ..Default::default()
        };
        let err = create(&client, &input).await.unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::MissingKey)));

        input.key = Some("dd-key".to_string());
        let err = create(&client, &input).await.unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::MissingSite)));

        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_update_partial_config() {
        let stored = r#"{"id":"al-5","type":"datadog","config":{"key":"dd-key","site":"us1"},"events":["flag"]}"#;
        let mock = MockTransport::new().respond(200, stored).respond(200, stored);
        let client = mock.client();

        update(
            &client,
            &UpdateInput {
                workspace_id: Some("ws-1".to_string()),
                alert_id: Some("al-5".to_string()),
                site: Some("eu1".to_string()),
                events: Some(vec!["flag".to_string()]),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(
            mock.requests()[1].body,
            Some(serde_json::json!({"config": {"site": "eu1"}, "events": ["flag"]}))
        );
    }
}
