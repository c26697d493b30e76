//! Compute ACL display models

use serde::Serialize;
use tabled::Tabled;

use edgeop::api::acl::{AclEntry, ComputeAcl};

/// ACL display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AclDisplay {
    #[tabled(rename = "ACL ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,
}

impl From<ComputeAcl> for AclDisplay {
    fn from(acl: ComputeAcl) -> Self {
        Self {
            id: acl.id,
            name: acl.name,
        }
    }
}

/// One prefix in an ACL.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AclEntryDisplay {
    #[tabled(rename = "PREFIX")]
    pub prefix: String,

    #[tabled(rename = "ACTION")]
    pub action: String,
}

impl From<AclEntry> for AclEntryDisplay {
    fn from(entry: AclEntry) -> Self {
        Self {
            prefix: entry.prefix,
            action: entry.action.to_string(),
        }
    }
}
