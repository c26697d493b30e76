//! Init command implementation

use colored::Colorize;
use dialoguer::{Confirm, Password, theme::ColorfulTheme};

use edgeop::api::acl;
use edgeop::client::Client;
use edgeop::config::Config;
use edgeop::error::Result;

use crate::cli::args::GlobalOptions;

/// Run the init command
///
/// Prompts for an API token, checks it with a cheap read call and writes the
/// config file. `--api-host` is honoured for the check and saved alongside
/// the token.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to edgeop!".bold().green());
    println!("Let's set up your API access.\n");

    let mut config = Config::load_at(opts.config_ref()).unwrap_or_default();

    if config.api_key.is_some() && !opts.yes {
        let overwrite = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("An API token is already configured. Replace it?")
            .default(false)
            .interact()?;
        if !overwrite {
            println!("Keeping existing configuration.");
            return Ok(());
        }
    }

    let api_key = match &opts.api_key {
        Some(key) => key.clone(),
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter your API token")
            .interact()?,
    };

    println!("\n{}", "Verifying token...".cyan());
    let client = Client::with_host(api_key.clone(), opts.api_host.clone())?;
    let acls = acl::list(&client).await?;
    println!(
        "{} Token accepted ({} compute ACLs visible)",
        "✓".green(),
        acls.data.len()
    );

    config.api_key = Some(api_key);
    if opts.api_host.is_some() {
        config.api_host = opts.api_host.clone();
    }
    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "edgeop status".cyan());
    println!("  {} - List compute ACLs", "edgeop acl list".cyan());

    Ok(())
}
