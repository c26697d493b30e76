//! Status command implementation

use colored::Colorize;

use edgeop::client::DEFAULT_API_HOST;
use edgeop::config::Config;
use edgeop::error::{ConfigError, Error, Result};

use crate::cli::args::GlobalOptions;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "edgeop Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;

    let config = match Config::load_at(opts.config_ref()) {
        Ok(config) => {
            println!("Config file: {}", config_path.display().to_string().cyan());
            config
        }
        Err(Error::Config(ConfigError::NotFound)) => {
            println!("{} No config file at {}", "✗".red(), config_path.display());
            println!("  → Run 'edgeop init' to configure");
            Config::default()
        }
        Err(e) => return Err(e),
    };

    println!();

    if opts.api_key.is_some() {
        println!("{} API key provided by flag/environment", "✓".green());
    } else if config.api_key().is_ok() {
        println!("{} API key configured", "✓".green());
    } else {
        println!("{} API key not configured", "✗".red());
        println!("  → Run 'edgeop init' to configure");
    }

    let host = opts
        .api_host
        .as_deref()
        .or(config.api_host.as_deref())
        .unwrap_or(DEFAULT_API_HOST);
    if host == DEFAULT_API_HOST {
        println!("{} API host: {}", "○".dimmed(), host);
    } else {
        println!("{} Custom API host: {}", "⚠".yellow(), host);
    }

    println!();
    println!("{}", "Preferences:".bold());
    println!(
        "  Output format: {}",
        config.preferences.format.as_deref().unwrap_or("pretty")
    );
    println!("  Page size: {}", config.preferences.page_size);

    Ok(())
}
