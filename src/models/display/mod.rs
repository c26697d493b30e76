//! Display model implementations for table and JSON output

mod access_key;
mod acl;
mod common;
mod domain;
mod workspace;

pub use access_key::AccessKeyDisplay;
pub use acl::{AclDisplay, AclEntryDisplay};
pub use domain::DomainDisplay;
pub use workspace::WorkspaceDisplay;
