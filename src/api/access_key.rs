//! Object storage access keys

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::decode::optional_timestamp;
use crate::client::endpoint::{require, require_id};
use crate::client::{Client, Collection, Endpoint};
use crate::error::{Result, ValidationError};

const BASE: &str = "/resources/object-storage/access-keys";

/// Scope granted to an access key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Permission {
    ReadWriteAdmin,
    ReadOnlyAdmin,
    ReadWriteObjects,
    ReadOnlyObjects,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ReadWriteAdmin => "read-write-admin",
            Permission::ReadOnlyAdmin => "read-only-admin",
            Permission::ReadWriteObjects => "read-write-objects",
            Permission::ReadOnlyObjects => "read-only-objects",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        [
            Permission::ReadWriteAdmin,
            Permission::ReadOnlyAdmin,
            Permission::ReadWriteObjects,
            Permission::ReadOnlyObjects,
        ]
        .into_iter()
        .find(|p| p.as_str() == s)
        .ok_or_else(|| format!("unknown permission '{s}'"))
    }
}

/// An object storage access key.
///
/// `secret_key` is only populated in the response to [`create`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessKey {
    pub access_key_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,

    #[serde(default)]
    pub description: String,

    pub permission: Permission,

    /// Buckets the key is limited to; empty means all buckets
    #[serde(default)]
    pub buckets: Vec<String>,

    #[serde(default, with = "optional_timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<Permission>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub buckets: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct GetInput {
    pub access_key_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteInput {
    pub access_key_id: Option<String>,
}

/// Create a key. The returned value is the only place the secret appears.
pub async fn create(client: &Client, input: &CreateInput) -> Result<AccessKey> {
    require_id(&input.description, ValidationError::MissingDescription)?;
    require(&input.permission, ValidationError::MissingPermission)?;

    Endpoint::post(BASE)
        .json(input)?
        .expect(200)
        .fetch(client, "access key")
        .await
}

pub async fn get(client: &Client, input: &GetInput) -> Result<AccessKey> {
    let id = require_id(&input.access_key_id, ValidationError::MissingAccessKeyId)?;

    Endpoint::get(BASE)
        .id(id)
        .expect(200)
        .fetch(client, "access key")
        .await
}

pub async fn list(client: &Client) -> Result<Collection<AccessKey>> {
    Endpoint::get(BASE)
        .expect(200)
        .fetch(client, "access key list")
        .await
}

pub async fn delete(client: &Client, input: &DeleteInput) -> Result<()> {
    let id = require_id(&input.access_key_id, ValidationError::MissingAccessKeyId)?;

    Endpoint::delete(BASE).id(id).expect(204).send(client).await?;
    Ok(())
}
