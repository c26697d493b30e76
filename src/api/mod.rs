//! Resource modules
//!
//! One module per API family. Each exposes free async functions taking a
//! [`Client`](crate::client::Client) and an input struct whose fields are all
//! `Option`; required fields are checked before anything is sent.

pub mod access_key;
pub mod acl;
pub mod domain;
pub mod ngwaf;
