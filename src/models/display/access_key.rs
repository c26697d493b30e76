//! Object storage access key display model

use serde::Serialize;
use tabled::Tabled;

use edgeop::api::access_key::AccessKey;

use super::common::format_timestamp;

/// Access key display model. The secret is never part of it.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AccessKeyDisplay {
    #[tabled(rename = "ACCESS KEY ID")]
    pub id: String,

    #[tabled(rename = "PERMISSION")]
    pub permission: String,

    #[tabled(rename = "BUCKETS")]
    pub buckets: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,

    #[tabled(rename = "CREATED")]
    pub created: String,
}

impl From<AccessKey> for AccessKeyDisplay {
    fn from(key: AccessKey) -> Self {
        let buckets = if key.buckets.is_empty() {
            "(all)".to_string()
        } else {
            key.buckets.join(", ")
        };

        Self {
            id: key.access_key_id,
            permission: key.permission.to_string(),
            buckets,
            description: key.description,
            created: format_timestamp(key.created_at.as_ref()),
        }
    }
}
