//! Opsgenie alerts

use serde::{Deserialize, Serialize};

use super::{Integration, IntegrationAlert, alerts, create_integration, get_integration, update_integration};
use crate::client::endpoint::require_id;
use crate::client::{Client, Endpoint};
use crate::error::{Result, ValidationError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpsgenieConfig {
    /// Opsgenie API integration key
    pub key: String,
}

impl Integration for OpsgenieConfig {
    const TYPE: &'static str = "opsgenie";
}

pub type OpsgenieAlert = IntegrationAlert<OpsgenieConfig>;

#[derive(Debug, Clone, Default)]
pub struct CreateInput {
    pub workspace_id: Option<String>,
    pub key: Option<String>,
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
    pub events: Option<Vec<String>>,
    pub description: Option<String>,
}

#[derive(Serialize)]
struct ConfigPatch<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<&'a str>,
}

pub async fn create(client: &Client, input: &CreateInput) -> Result<OpsgenieAlert> {
    let endpoint = alerts(Endpoint::post, &input.workspace_id)?;
    let config = OpsgenieConfig {
        key: require_id(&input.key, ValidationError::MissingKey)?.to_string(),
    };

    create_integration(client, endpoint, &config, &input.events, &input.description).await
}

pub async fn get(client: &Client, input: &GetInput) -> Result<OpsgenieAlert> {
    get_integration(client, &input.workspace_id, &input.alert_id).await
}

pub async fn update(client: &Client, input: &UpdateInput) -> Result<OpsgenieAlert> {
    let patch = ConfigPatch {
        key: input.key.as_deref(),
    };

    update_integration::<OpsgenieConfig, _>(
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
    use crate::error::{ApiError, Error};

    #[tokio::test]
    async fn test_create_requires_key() {
        let mock = MockTransport::new();
        let client = mock.client();

        let err = create(
            &client,
            &CreateInput {
                workspace_id: Some("ws-1".to_string()),
                events: Some(vec!["flag".to_string()]),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::MissingKey)));
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_create_requires_events() {
        let mock = MockTransport::new();
        let client = mock.client();

        for events in [None, Some(Vec::new())] {
            let err = create(
                &client,
                &CreateInput {
                    workspace_id: Some("ws-1".to_string()),
                    key: Some("og-key".to_string()),
                    events,
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
            assert!(matches!(err, Error::Validation(ValidationError::MissingEvents)));
        }
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_update_other_type_sends_no_patch() {
        let mock = MockTransport::new().respond(
            200,
            r#"{"id":"al-3","type":"pagerduty","config":{"key":"pd-key"},"events":["flag"]}"#,
        );
        let client = mock.client();

        let err = update(
            &client,
            &UpdateInput {
                workspace_id: Some("ws-1".to_string()),
                alert_id: Some("al-3".to_string()),
                key: Some("og-key".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

        match err {
            Error::Api(ApiError::AlertTypeMismatch { expected, actual, .. }) => {
                assert_eq!(expected, "opsgenie");
                assert_eq!(actual, "pagerduty");
            }
            other => panic!("expected type mismatch, got {other:?}"),
        }
        assert_eq!(mock.call_count(), 1);
    }
}
