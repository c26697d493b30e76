//! Confirmation prompt for destructive commands

use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};

use edgeop::error::Result;

/// Ask before a destructive action unless `--yes` was given.
///
/// Returns `false` when the user declines; the caller prints nothing further.
pub fn confirm_destructive(yes: bool, what: &str) -> Result<bool> {
    if yes {
        return Ok(true);
    }

    eprintln!("{} {} This cannot be undone.", "⚠".yellow(), what);
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Confirm?")
        .default(false)
        .interact()?;

    if !confirmed {
        eprintln!("Cancelled.");
    }
    Ok(confirmed)
}
