//! Compute ACLs
//!
//! Named IP prefix lists evaluated at the edge. Entries are managed through a
//! batch PATCH; individual addresses can be looked up against the list.

use serde::{Deserialize, Serialize};

use crate::client::endpoint::require_id;
use crate::client::{Client, Collection, CursorPage, Endpoint, Meta};
use crate::error::{Result, ValidationError};

const BASE: &str = "/resources/acls";

/// A compute ACL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputeAcl {
    /// ACL identifier
    pub id: String,

    /// ACL name
    pub name: String,
}

/// What happens to a request matching an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AclAction {
    Allow,
    Block,
}

impl std::fmt::Display for AclAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AclAction::Allow => write!(f, "ALLOW"),
            AclAction::Block => write!(f, "BLOCK"),
        }
    }
}

impl std::str::FromStr for AclAction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ALLOW" => Ok(AclAction::Allow),
            "BLOCK" => Ok(AclAction::Block),
            other => Err(format!("unknown ACL action '{other}' (expected ALLOW or BLOCK)")),
        }
    }
}

/// One prefix in an ACL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AclEntry {
    /// IP prefix in CIDR notation
    pub prefix: String,

    pub action: AclAction,
}

/// A page of ACL entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AclEntries {
    #[serde(default)]
    pub entries: Vec<AclEntry>,

    #[serde(default)]
    pub meta: Meta,
}

impl CursorPage for AclEntries {
    type Item = AclEntry;

    fn next_cursor(&self) -> Option<&str> {
        self.meta.next_cursor()
    }

    fn into_items(self) -> Vec<AclEntry> {
        self.entries
    }
}

/// Batch operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryOp {
    Create,
    Update,
    Delete,
}

/// One change in an update batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchEntry {
    pub op: EntryOp,

    pub prefix: String,

    /// Required for create and update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<AclAction>,
}

impl BatchEntry {
    pub fn create(prefix: impl Into<String>, action: AclAction) -> Self {
        Self {
            op: EntryOp::Create,
            prefix: prefix.into(),
            action: Some(action),
        }
    }

    pub fn update(prefix: impl Into<String>, action: AclAction) -> Self {
        Self {
            op: EntryOp::Update,
            prefix: prefix.into(),
            action: Some(action),
        }
    }

    pub fn delete(prefix: impl Into<String>) -> Self {
        Self {
            op: EntryOp::Delete,
            prefix: prefix.into(),
            action: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateInput {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct DescribeInput {
    pub acl_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ListEntriesInput {
    pub acl_id: Option<String>,
    pub cursor: Option<String>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct LookupInput {
    pub acl_id: Option<String>,

    /// Address to match against the ACL's prefixes
    pub ip: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateInput {
    pub acl_id: Option<String>,
    pub entries: Option<Vec<BatchEntry>>,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteInput {
    pub acl_id: Option<String>,
}

/// Create an ACL.
pub async fn create(client: &Client, input: &CreateInput) -> Result<ComputeAcl> {
    let name = require_id(&input.name, ValidationError::MissingName)?;

    #[derive(Serialize)]
    struct Body<'a> {
        name: &'a str,
    }

    Endpoint::post(BASE)
        .json(&Body { name })?
        .expect(200)
        .fetch(client, "compute ACL")
        .await
}

/// Fetch a single ACL.
pub async fn describe(client: &Client, input: &DescribeInput) -> Result<ComputeAcl> {
    let acl_id = require_id(&input.acl_id, ValidationError::MissingAclId)?;

    Endpoint::get(BASE)
        .id(acl_id)
        .expect(200)
        .fetch(client, "compute ACL")
        .await
}

/// List all ACLs.
pub async fn list(client: &Client) -> Result<Collection<ComputeAcl>> {
    Endpoint::get(BASE)
        .expect(200)
        .fetch(client, "compute ACL list")
        .await
}

/// List one page of an ACL's entries.
pub async fn list_entries(client: &Client, input: &ListEntriesInput) -> Result<AclEntries> {
    let acl_id = require_id(&input.acl_id, ValidationError::MissingAclId)?;

    Endpoint::get(BASE)
        .id(acl_id)
        .segment("entries")
        .query("cursor", input.cursor.as_deref())
        .query("limit", input.limit)
        .expect(200)
        .fetch(client, "compute ACL entries")
        .await
}

/// Find the entry matching `ip`.
///
/// Returns `Ok(None)` when no prefix in the ACL covers the address; the API
/// answers that case with 204.
pub async fn lookup(client: &Client, input: &LookupInput) -> Result<Option<AclEntry>> {
    let acl_id = require_id(&input.acl_id, ValidationError::MissingAclId)?;
    let ip = require_id(&input.ip, ValidationError::MissingIp)?;

    let response = Endpoint::get(BASE)
        .id(acl_id)
        .segment("entry")
        .id(ip)
        .send(client)
        .await?;

    if response.status == 204 || response.body.is_empty() {
        return Ok(None);
    }
    crate::client::decode::decode_json(&response.body, "compute ACL entry").map(Some)
}

/// Apply a batch of entry changes. The API accepts the batch asynchronously.
pub async fn update(client: &Client, input: &UpdateInput) -> Result<()> {
    let acl_id = require_id(&input.acl_id, ValidationError::MissingAclId)?;
    let entries = match &input.entries {
        Some(e) if !e.is_empty() => e,
        _ => return Err(ValidationError::MissingEntries.into()),
    };

    #[derive(Serialize)]
    struct Body<'a> {
        entries: &'a [BatchEntry],
    }

    Endpoint::patch(BASE)
        .id(acl_id)
        .segment("entries")
        .json(&Body { entries })?
        .expect(202)
        .send(client)
        .await?;
    Ok(())
}

/// Delete an ACL.
pub async fn delete(client: &Client, input: &DeleteInput) -> Result<()> {
    let acl_id = require_id(&input.acl_id, ValidationError::MissingAclId)?;

    Endpoint::delete(BASE)
        .id(acl_id)
        .expect(200)
        .send(client)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use futures::TryStreamExt;

    use super::*;
    use crate::client::mock::{FakeAclService, MockTransport};
    use crate::client::paginate;
    use crate::error::Error;

    fn assert_missing(result: Result<impl std::fmt::Debug>, expected: ValidationError) {
        match result {
            Err(Error::Validation(e)) => assert_eq!(e, expected),
            other => panic!("expected {expected:?}, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_required_fields_fail_before_any_request() {
        let mock = MockTransport::new();
        let client = mock.client();

        assert_missing(create(&client, &CreateInput::default()).await, ValidationError::MissingName);
        assert_missing(
            describe(&client, &DescribeInput::default()).await,
            ValidationError::MissingAclId,
        );
        assert_missing(
            list_entries(&client, &ListEntriesInput::default()).await,
            ValidationError::MissingAclId,
        );
        assert_missing(
            lookup(&client, &LookupInput::default()).await,
            ValidationError::MissingAclId,
        );
        assert_missing(
            lookup(
                &client,
                &LookupInput {
                    acl_id: Some("acl-1".to_string()),
                    ip: None,
                },
            )
            .await,
            ValidationError::MissingIp,
        );
        assert_missing(
            update(&client, &UpdateInput::default()).await,
            ValidationError::MissingAclId,
        );
        assert_missing(
            update(
                &client,
                &UpdateInput {
                    acl_id: Some("acl-1".to_string()),
                    entries: Some(Vec::new()),
                },
            )
            .await,
            ValidationError::MissingEntries,
        );
        assert_missing(delete(&client, &DeleteInput::default()).await, ValidationError::MissingAclId);

        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_update_sends_batch_and_expects_202() {
        let mock = MockTransport::new().respond(202, "");
        let client = mock.client();

        update(
            &client,
            &UpdateInput {
                acl_id: Some("acl-1".to_string()),
                entries: Some(vec![
                    BatchEntry::create("1.2.3.0/24", AclAction::Block),
                    BatchEntry::delete("10.0.0.0/8"),
                ]),
            },
        )
        .await
        .unwrap();

        let req = &mock.requests()[0];
        assert_eq!(req.method, reqwest::Method::PATCH);
        assert_eq!(req.path, "/resources/acls/acl-1/entries");
        assert_eq!(
            req.body,
            Some(serde_json::json!({"entries": [
                {"op": "create", "prefix": "1.2.3.0/24", "action": "BLOCK"},
                {"op": "delete", "prefix": "10.0.0.0/8"}
            ]}))
        );
    }

    #[tokio::test]
    async fn test_update_rejects_plain_200() {
        let mock = MockTransport::new().respond(200, "");
        let client = mock.client();

        let result = update(
            &client,
            &UpdateInput {
                acl_id: Some("acl-1".to_string()),
                entries: Some(vec![BatchEntry::delete("10.0.0.0/8")]),
            },
        )
        .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_lookup_escapes_ipv6() {
        let mock = MockTransport::new().respond(204, "");
        let client = mock.client();

        let entry = lookup(
            &client,
            &LookupInput {
                acl_id: Some("acl-1".to_string()),
                ip: Some("2001:db8::1".to_string()),
            },
        )
        .await
        .unwrap();

        assert!(entry.is_none());
        assert_eq!(mock.requests()[0].path, "/resources/acls/acl-1/entry/2001%3Adb8%3A%3A1");
    }

    #[test]
    fn test_action_parse() {
        assert_eq!("block".parse::<AclAction>().unwrap(), AclAction::Block);
        assert_eq!("ALLOW".parse::<AclAction>().unwrap(), AclAction::Allow);
        assert!("drop".parse::<AclAction>().is_err());
    }

    #[tokio::test]
    async fn test_acl_scenario_create_update_list_lookup() {
        let service = FakeAclService::new();
        let client = service.client();

        let acl = create(
            &client,
            &CreateInput {
                name: Some("test-acl".to_string()),
            },
        )
        .await
        .unwrap();
        assert_eq!(acl.name, "test-acl");

        let fetched = describe(
            &client,
            &DescribeInput {
                acl_id: Some(acl.id.clone()),
            },
        )
        .await
        .unwrap();
        assert_eq!(fetched, acl);

        update(
            &client,
            &UpdateInput {
                acl_id: Some(acl.id.clone()),
                entries: Some(vec![BatchEntry::create("1.2.3.0/24", AclAction::Block)]),
            },
        )
        .await
        .unwrap();

        let entries = list_entries(
            &client,
            &ListEntriesInput {
                acl_id: Some(acl.id.clone()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(
            entries.entries,
            vec![AclEntry {
                prefix: "1.2.3.0/24".to_string(),
                action: AclAction::Block,
            }]
        );

        let hit = lookup(
            &client,
            &LookupInput {
                acl_id: Some(acl.id.clone()),
                ip: Some("1.2.3.4".to_string()),
            },
        )
        .await
        .unwrap();
        assert_eq!(hit.map(|e| e.prefix), Some("1.2.3.0/24".to_string()));

        let miss = lookup(
            &client,
            &LookupInput {
                acl_id: Some(acl.id.clone()),
                ip: Some("8.8.8.8".to_string()),
            },
        )
        .await
        .unwrap();
        assert!(miss.is_none());
    }

    #[tokio::test]
    async fn test_entries_pagination_is_complete_and_ordered() {
        let service = FakeAclService::new();
        let client = service.client();

        let acl = create(
            &client,
            &CreateInput {
                name: Some("paged".to_string()),
            },
        )
        .await
        .unwrap();

        let batch: Vec<BatchEntry> = (0..7)
            .map(|i| BatchEntry::create(format!("10.0.{i}.0/24"), AclAction::Allow))
            .collect();
        update(
            &client,
            &UpdateInput {
                acl_id: Some(acl.id.clone()),
                entries: Some(batch),
            },
        )
        .await
        .unwrap();

        let acl_id = acl.id.clone();
        let all: Vec<AclEntry> = paginate(|cursor| {
            let client = client.clone();
            let input = ListEntriesInput {
                acl_id: Some(acl_id.clone()),
                cursor,
                limit: Some(3),
            };
            async move { list_entries(&client, &input).await }
        })
        .try_collect()
        .await
        .unwrap();

        let prefixes: Vec<String> = all.into_iter().map(|e| e.prefix).collect();
        let expected: Vec<String> = (0..7).map(|i| format!("10.0.{i}.0/24")).collect();
        assert_eq!(prefixes, expected);
    }

    #[tokio::test]
    async fn test_delete_then_describe_is_not_found() {
        let service = FakeAclService::new();
        let client = service.client();

        let acl = create(
            &client,
            &CreateInput {
                name: Some("doomed".to_string()),
            },
        )
        .await
        .unwrap();

        delete(
            &client,
            &DeleteInput {
                acl_id: Some(acl.id.clone()),
            },
        )
        .await
        .unwrap();

        let err = describe(
            &client,
            &DescribeInput {
                acl_id: Some(acl.id),
            },
        )
        .await
        .unwrap_err();
        assert!(err.is_not_found());
    }
}
