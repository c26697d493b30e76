//! NGWAF workspace display model

use serde::Serialize;
use tabled::Tabled;

use edgeop::api::ngwaf::workspace::Workspace;

use super::common::{format_timestamp, truncate_string};

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct WorkspaceDisplay {
    #[tabled(rename = "WORKSPACE ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "MODE")]
    pub mode: String,

    #[tabled(rename = "BLOCK CODE")]
    pub blocking_code: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,

    #[tabled(rename = "CREATED")]
    pub created: String,
}

impl From<Workspace> for WorkspaceDisplay {
    fn from(ws: Workspace) -> Self {
        Self {
            id: ws.workspace_id,
            name: ws.name,
            mode: ws.mode.to_string(),
            blocking_code: ws
                .default_blocking_response_code
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".to_string()),
            description: truncate_string(&ws.description, 40),
            created: format_timestamp(ws.created_at.as_ref()),
        }
    }
}
