//! Domains

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::decode::optional_timestamp;
use crate::client::endpoint::require_id;
use crate::client::{Client, Collection, Endpoint};
use crate::error::{Result, ValidationError};

const BASE: &str = "/domains/v1";

/// A domain registered with the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    /// Domain identifier
    #[serde(rename = "id")]
    pub domain_id: String,

    /// Fully qualified domain name
    pub fqdn: String,

    /// Service the domain routes to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, with = "optional_timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "optional_timestamp", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fqdn: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GetInput {
    pub domain_id: Option<String>,
}

/// Filters for [`list`]. All optional.
#[derive(Debug, Clone, Default)]
pub struct ListInput {
    pub cursor: Option<String>,
    pub fqdn: Option<String>,
    pub limit: Option<u32>,
    pub service_id: Option<String>,

    /// Sort field, prefix with `-` for descending (e.g. `-fqdn`)
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateInput {
    #[serde(skip)]
    pub domain_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteInput {
    pub domain_id: Option<String>,
}

pub async fn create(client: &Client, input: &CreateInput) -> Result<Domain> {
    require_id(&input.fqdn, ValidationError::MissingFqdn)?;

    Endpoint::post(BASE)
        .json(input)?
        .expect(201)
        .fetch(client, "domain")
        .await
}

pub async fn get(client: &Client, input: &GetInput) -> Result<Domain> {
    let domain_id = require_id(&input.domain_id, ValidationError::MissingDomainId)?;

    Endpoint::get(BASE)
        .id(domain_id)
        .expect(200)
        .fetch(client, "domain")
        .await
}

/// List one page of domains.
pub async fn list(client: &Client, input: &ListInput) -> Result<Collection<Domain>> {
    Endpoint::get(BASE)
        .query("cursor", input.cursor.as_deref())
        .query("fqdn", input.fqdn.as_deref())
        .query("limit", input.limit)
        .query("service_id", input.service_id.as_deref())
        .query("sort", input.sort.as_deref())
        .expect(200)
        .fetch(client, "domain list")
        .await
}

/// Update a domain. Fields left `None` are not sent and keep their value.
pub async fn update(client: &Client, input: &UpdateInput) -> Result<Domain> {
    let domain_id = require_id(&input.domain_id, ValidationError::MissingDomainId)?;

    Endpoint::patch(BASE)
        .id(domain_id)
        .json(input)?
        .expect(200)
        .fetch(client, "domain")
        .await
}

pub async fn delete(client: &Client, input: &DeleteInput) -> Result<()> {
    let domain_id = require_id(&input.domain_id, ValidationError::MissingDomainId)?;

    Endpoint::delete(BASE)
        .id(domain_id)
        .expect(204)
        .send(client)
        .await?;
    Ok(())
}
