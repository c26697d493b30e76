//! Shared command handler patterns

pub mod confirm;
pub mod list;

pub use confirm::confirm_destructive;
pub use list::{collect_with_progress, run_list_command};
