//! Domain display model

use serde::Serialize;
use tabled::Tabled;

use edgeop::api::domain::Domain;

use super::common::{format_timestamp, or_dash, truncate_string};

/// Domain display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct DomainDisplay {
    #[tabled(rename = "DOMAIN ID")]
    pub id: String,

    #[tabled(rename = "FQDN")]
    pub fqdn: String,

    #[tabled(rename = "SERVICE")]
    pub service_id: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,

    #[tabled(rename = "UPDATED")]
    pub updated: String,
}

impl From<Domain> for DomainDisplay {
    fn from(domain: Domain) -> Self {
        Self {
            id: domain.domain_id,
            fqdn: domain.fqdn,
            service_id: or_dash(domain.service_id.as_deref()),
            description: truncate_string(&or_dash(domain.description.as_deref()), 40),
            updated: format_timestamp(domain.updated_at.or(domain.created_at).as_ref()),
        }
    }
}
