//! edgeop - async client for the edge cloud management API
//!
//! ```ignore
//! use edgeop::api::acl;
//! use edgeop::client::Client;
//!
//! let client = Client::new(api_key)?;
//! let created = acl::create(&client, &acl::CreateInput { name: Some("blocklist".into()) }).await?;
//! ```
//!
//! Covered families: compute ACLs, domains, object storage access keys and
//! the NGWAF workspace resources (signals, lists, alerts, requests,
//! thresholds, virtual patches).

pub mod api;
pub mod client;
pub mod config;
pub mod error;

pub use client::Client;
pub use error::{Error, Result};
