//! Workspace lists (IPs, countries, strings, wildcards, signals)
//!
//! Rules reference a list by its `reference_id`. Updating `entries` replaces
//! the whole set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::nested;
use crate::client::decode::optional_timestamp;
use crate::client::endpoint::{require, require_id};
use crate::client::{Client, Collection, Endpoint};
use crate::error::{Result, ValidationError};

const LISTS: &str = "lists";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    Ip,
    Country,
    String,
    Wildcard,
    Signal,
}

impl ListType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListType::Ip => "ip",
            ListType::Country => "country",
            ListType::String => "string",
            ListType::Wildcard => "wildcard",
            ListType::Signal => "signal",
        }
    }
}

impl std::fmt::Display for ListType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    #[serde(rename = "id")]
    pub list_id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(rename = "type")]
    pub list_type: ListType,

    #[serde(default)]
    pub entries: Vec<String>,

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

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub list_type: Option<ListType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct GetInput {
    pub workspace_id: Option<String>,
    pub list_id: Option<String>,
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
    pub list_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteInput {
    pub workspace_id: Option<String>,
    pub list_id: Option<String>,
}

pub async fn create(client: &Client, input: &CreateInput) -> Result<List> {
    let endpoint = nested(Endpoint::post, &input.workspace_id, LISTS)?;
    require_id(&input.name, ValidationError::MissingName)?;
    require(&input.description, ValidationError::MissingDescription)?;
    require(&input.list_type, ValidationError::MissingType)?;
    require(&input.entries, ValidationError::MissingEntries)?;

    endpoint
        .json(input)?
        .expect(201)
        .fetch(client, "list")
        .await
}

pub async fn get(client: &Client, input: &GetInput) -> Result<List> {
    let endpoint = nested(Endpoint::get, &input.workspace_id, LISTS)?;
    let list_id = require_id(&input.list_id, ValidationError::MissingListId)?;

    endpoint.id(list_id).expect(200).fetch(client, "list").await
}

pub async fn list(client: &Client, input: &ListInput) -> Result<Collection<List>> {
    nested(Endpoint::get, &input.workspace_id, LISTS)?
        .query("limit", input.limit)
        .query("page", input.page)
        .expect(200)
        .fetch(client, "list collection")
        .await
}

pub async fn update(client: &Client, input: &UpdateInput) -> Result<List> {
    let endpoint = nested(Endpoint::patch, &input.workspace_id, LISTS)?;
    let list_id = require_id(&input.list_id, ValidationError::MissingListId)?;

    endpoint
        .id(list_id)
        .json(input)?
        .expect(200)
        .fetch(client, "list")
        .await
}

pub async fn delete(client: &Client, input: &DeleteInput) -> Result<()> {
    let endpoint = nested(Endpoint::delete, &input.workspace_id, LISTS)?;
    let list_id = require_id(&input.list_id, ValidationError::MissingListId)?;

    endpoint.id(list_id).expect(204).send(client).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockTransport;
    use crate::error::Error;

    fn full_input() -> CreateInput {
        CreateInput {
            workspace_id: Some("ws-1".to_string()),
            name: Some("blocked-countries".to_string()),
            description: Some("embargoed".to_string()),
            list_type: Some(ListType::Country),
            entries: Some(vec!["KP".to_string(), "IR".to_string()]),
        }
    }

    #[tokio::test]
    async fn test_create_each_required_field() {
        let mock = MockTransport::new();
        let client = mock.client();

        for field in 0..5 {
            let mut input = full_input();
            let expected = match field {
                0 => {
                    input.workspace_id = None;
                    ValidationError::MissingWorkspaceId
                }
                1 => {
                    input.name = None;
                    ValidationError::MissingName
                }
                2 => {
                    input.description = None;
                    ValidationError::MissingDescription
                }
                3 => {
                    input.list_type = None;
                    ValidationError::MissingType
                }
                _ => {
                    input.entries = None;
                    ValidationError::MissingEntries
                }
            };
            let err = create(&client, &input).await.unwrap_err();
            match err {
                Error::Validation(v) => assert_eq!(v, expected),
                other => panic!("expected validation error, got {other:?}"),
            }
        }

        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_create_body_uses_type_key() {
        let mock = MockTransport::new().respond(
            201,
            r#"{"id":"l-1","name":"blocked-countries","description":"embargoed","type":"country","entries":["KP","IR"],"reference_id":"site.blocked-countries"}"#,
        );
        let client = mock.client();

        let list = create(&client, &full_input()).await.unwrap();
        assert_eq!(list.list_type, ListType::Country);
        assert_eq!(list.entries, vec!["KP", "IR"]);

        let req = &mock.requests()[0];
        assert_eq!(req.path, "/ngwaf/v1/workspaces/ws-1/lists");
        assert_eq!(
            req.body,
            Some(serde_json::json!({
                "name": "blocked-countries",
                "description": "embargoed",
                "type": "country",
                "entries": ["KP", "IR"]
            }))
        );
    }

    #[tokio::test]
    async fn test_get_missing_list_id() {
        let mock = MockTransport::new();
        let client = mock.client();

        let err = get(
            &client,
            &GetInput {
                workspace_id: Some("ws-1".to_string()),
                list_id: Some(String::new()),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::MissingListId)));
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_list_pages_by_number() {
        let mock = MockTransport::new().respond(200, r#"{"data":[],"meta":{"limit":50,"total":0}}"#);
        let client = mock.client();

        list(
            &client,
            &ListInput {
                workspace_id: Some("ws-1".to_string()),
                limit: Some(50),
                page: Some(2),
            },
        )
        .await
        .unwrap();

        let req = &mock.requests()[0];
        assert_eq!(req.path, "/ngwaf/v1/workspaces/ws-1/lists");
        assert_eq!(
            req.query,
            vec![
                ("limit".to_string(), "50".to_string()),
                ("page".to_string(), "2".to_string())
            ]
        );
    }
}
