//! Global CLI options shared across all commands
//!
//! Handlers take one `&GlobalOptions` instead of threading each global flag
//! through their signatures.

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; config file values are merged in
/// `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format, when given on the command line
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.edgeop/config.yaml)
    pub config: Option<String>,

    /// API key override (bypasses config file)
    pub api_key: Option<String>,

    /// Custom API host for development/testing
    pub api_host: Option<String>,

    /// Skip confirmation prompts
    pub yes: bool,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            api_key: cli.api_key.clone(),
            api_host: cli.api_host.clone(),
            yes: cli.yes,
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_global_options_from_cli() {
        let cli = Cli::parse_from([
            "edgeop",
            "--format",
            "json",
            "--config",
            "/custom/path",
            "--api-host",
            "http://localhost:8080",
            "--yes",
            "status",
        ]);
        let opts = GlobalOptions::from_cli(&cli);

        assert_eq!(opts.format, Some(OutputFormat::Json));
        assert_eq!(opts.config_ref(), Some("/custom/path"));
        assert_eq!(opts.api_host.as_deref(), Some("http://localhost:8080"));
        assert!(opts.yes);
    }

    #[test]
    fn test_global_options_defaults() {
        let opts = GlobalOptions::default();
        assert_eq!(opts.format, None);
        assert_eq!(opts.config_ref(), None);
        assert!(!opts.yes);
    }
}
