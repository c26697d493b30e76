//! Pagination argument types for CLI commands

use clap::Args;

/// Pagination for cursor-based list commands.
///
/// Flatten this into any command whose endpoint pages by cursor:
/// ```ignore
/// Entries {
///     #[command(flatten)]
///     pagination: CursorArgs,
/// }
/// ```
#[derive(Args, Debug, Default, Clone)]
pub struct CursorArgs {
    /// Maximum results per page
    #[arg(long, short = 'n')]
    pub limit: Option<u32>,

    /// Cursor returned by a previous page
    #[arg(long, conflicts_with = "all")]
    pub cursor: Option<String>,

    /// Follow cursors until every page has been fetched
    #[arg(long)]
    pub all: bool,
}

impl CursorArgs {
    /// Page size to request, falling back to the configured default.
    pub fn page_size(&self, default: u32) -> u32 {
        self.limit.unwrap_or(default)
    }
}

/// Pagination for page-numbered list commands.
#[derive(Args, Debug, Default, Clone)]
pub struct PageArgs {
    /// Maximum results per page
    #[arg(long, short = 'n')]
    pub limit: Option<u32>,

    /// Page number (1-indexed)
    #[arg(long, short = 'p')]
    pub page: Option<u32>,
}
