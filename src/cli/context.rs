//! Command execution context
//!
//! Loads config, applies CLI/env overrides, validates the API key and builds
//! the client, so each handler starts from a ready-to-use context.

use log::debug;

use edgeop::client::Client;
use edgeop::config::Config;
use edgeop::error::{ConfigError, Error, Result};

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Loaded configuration with overrides applied
    pub config: Config,
    /// Authenticated API client
    pub client: Client,
    /// Resolved output format
    pub format: OutputFormat,
    /// Skip confirmation prompts
    pub yes: bool,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// A missing config file is tolerated when the API key comes from
    /// `--api-key` / `EDGEOP_API_KEY`.
    ///
    /// # Errors
    /// Returns error if config cannot be loaded, no API key is available, or
    /// the API host is malformed.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let mut config = match Config::load_at(opts.config_ref()) {
            Ok(config) => config,
            Err(Error::Config(ConfigError::NotFound)) if opts.api_key.is_some() => {
                debug!("No config file; using API key from flags/environment");
                Config::default()
            }
            Err(e) => return Err(e),
        };

        if let Some(key) = &opts.api_key {
            config.api_key = Some(key.clone());
        }
        if let Some(host) = &opts.api_host {
            config.api_host = Some(host.clone());
        }

        let api_key = config.api_key()?.to_string();
        let client = Client::with_host(api_key, config.api_host.clone())?;
        let format = resolve_format(opts.format, &config);

        debug!(
            "Context ready (host={}, format={:?})",
            config.api_host.as_deref().unwrap_or("default"),
            format
        );

        Ok(Self {
            config,
            client,
            format,
            yes: opts.yes,
        })
    }

    /// Page size for list requests.
    pub fn page_size(&self) -> u32 {
        self.config.preferences.page_size
    }
}

/// Flag beats config preference; an unreadable preference falls back to pretty.
fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.or_else(|| {
        config
            .preferences
            .format
            .as_deref()
            .and_then(|f| f.parse().ok())
    })
    .unwrap_or_default()
}
