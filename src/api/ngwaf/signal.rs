//! Custom signals scoped to a workspace

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::nested;
use crate::client::decode::optional_timestamp;
use crate::client::endpoint::require_id;
use crate::client::{Client, Collection, Endpoint};
use crate::error::{Result, ValidationError};

const SIGNALS: &str = "signals";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    #[serde(rename = "id")]
    pub signal_id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Identifier used when matching the signal in rules (e.g. `site.my-signal`)
    #[serde(default)]
    pub reference_id: String,

    #[serde(default, with = "optional_timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "optional_timestamp", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateInput {
    #[serde(skip)]
    pub workspace_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GetInput {
    pub workspace_id: Option<String>,
    pub signal_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ListInput {
    pub workspace_id: Option<String>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

/// Only the description of a signal can change after creation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateInput {
    #[serde(skip)]
    pub workspace_id: Option<String>,

    #[serde(skip)]
    pub signal_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteInput {
    pub workspace_id: Option<String>,
    pub signal_id: Option<String>,
}

pub async fn create(client: &Client, input: &CreateInput) -> Result<Signal> {
    let endpoint = nested(Endpoint::post, &input.workspace_id, SIGNALS)?;
    require_id(&input.name, ValidationError::MissingName)?;

    endpoint
        .json(input)?
        .expect(201)
        .fetch(client, "signal")
        .await
}

pub async fn get(client: &Client, input: &GetInput) -> Result<Signal> {
    let endpoint = nested(Endpoint::get, &input.workspace_id, SIGNALS)?;
    let signal_id = require_id(&input.signal_id, ValidationError::MissingSignalId)?;

    endpoint
        .id(signal_id)
        .expect(200)
        .fetch(client, "signal")
        .await
}

pub async fn list(client: &Client, input: &ListInput) -> Result<Collection<Signal>> {
    nested(Endpoint::get, &input.workspace_id, SIGNALS)?
        .query("limit", input.limit)
        .query("page", input.page)
        .expect(200)
        .fetch(client, "signal list")
        .await
}

pub async fn update(client: &Client, input: &UpdateInput) -> Result<Signal> {
    let endpoint = nested(Endpoint::patch, &input.workspace_id, SIGNALS)?;
    let signal_id = require_id(&input.signal_id, ValidationError::MissingSignalId)?;

    endpoint
        .id(signal_id)
        .json(input)?
        .expect(200)
        .fetch(client, "signal")
        .await
}

pub async fn delete(client: &Client, input: &DeleteInput) -> Result<()> {
    let endpoint = nested(Endpoint::delete, &input.workspace_id, SIGNALS)?;
    let signal_id = require_id(&input.signal_id, ValidationError::MissingSignalId)?;

    endpoint.id(signal_id).expect(204).send(client).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockTransport;
    use crate::error::Error;

    #[tokio::test]
    async fn test_workspace_checked_before_resource_id() {
        let mock = MockTransport::new();
        let client = mock.client();

        let err = get(&client, &GetInput::default()).await.unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::MissingWorkspaceId)));

        let err = get(
            &client,
            &GetInput {
                workspace_id: Some("ws-1".to_string()),
                signal_id: None,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::MissingSignalId)));

        let err = create(
            &client,
            &CreateInput {
                workspace_id: Some("ws-1".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::MissingName)));

        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_create_posts_under_workspace() {
        let mock = MockTransport::new().respond(
            201,
            r#"{"id":"sig-1","name":"bad-bot","description":"","reference_id":"site.bad-bot","created_at":"2025-04-01T00:00:00Z"}"#,
        );
        let client = mock.client();

        let signal = create(
            &client,
            &CreateInput {
                workspace_id: Some("ws-1".to_string()),
                name: Some("bad-bot".to_string()),
                description: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(signal.reference_id, "site.bad-bot");
        assert!(signal.updated_at.is_none());

        let req = &mock.requests()[0];
        assert_eq!(req.path, "/ngwaf/v1/workspaces/ws-1/signals");
        assert_eq!(req.body, Some(serde_json::json!({"name": "bad-bot"})));
    }

    #[tokio::test]
    async fn test_update_delete_paths() {
        let mock = MockTransport::new()
            .respond(200, r#"{"id":"sig-1","name":"bad-bot","description":"bots"}"#)
            .respond(204, "");
        let client = mock.client();

        let updated = update(
            &client,
            &UpdateInput {
                workspace_id: Some("ws-1".to_string()),
                signal_id: Some("sig-1".to_string()),
                description: Some("bots".to_string()),
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.description, "bots");

        delete(
            &client,
            &DeleteInput {
                workspace_id: Some("ws-1".to_string()),
                signal_id: Some("sig-1".to_string()),
            },
        )
        .await
        .unwrap();

        let reqs = mock.requests();
        assert_eq!(reqs[0].path, "/ngwaf/v1/workspaces/ws-1/signals/sig-1");
        assert_eq!(reqs[0].body, Some(serde_json::json!({"description": "bots"})));
        assert_eq!(reqs[1].path, "/ngwaf/v1/workspaces/ws-1/signals/sig-1");
    }

    #[tokio::test]
    async fn test_signal_id_required_for_update_and_delete() {
        let mock = MockTransport::new();
        let client = mock.client();

        for signal_id in [None, Some(String::new())] {
            let err = update(
                &client,
                &UpdateInput {
                    workspace_id: Some("ws-1".to_string()),
                    signal_id: signal_id.clone(),
                    description: Some("credential stuffing".to_string()),
                },
            )
            .await
            .unwrap_err();
            assert!(matches!(err, Error::Validation(ValidationError::MissingSignalId)));

            let err = delete(
                &client,
                &DeleteInput {
                    workspace_id: Some("ws-1".to_string()),
                    signal_id,
                },
            )
            .await
            .unwrap_err();
            assert!(matches!(err, Error::Validation(ValidationError::MissingSignalId)));
        }

        let err = update(&client, &UpdateInput::default()).await.unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::MissingWorkspaceId)));

        assert_eq!(mock.call_count(), 0);
    }
}
