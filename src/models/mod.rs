//! Display models for CLI output
//!
//! API types are converted into these before printing so column names and
//! formatting stay out of the SDK.

pub mod display;

pub use display::{
    AccessKeyDisplay, AclDisplay, AclEntryDisplay, DomainDisplay, WorkspaceDisplay,
};
