//! Object storage access key commands

use colored::Colorize;

use edgeop::api::access_key::{self, AccessKey, CreateInput, DeleteInput, GetInput, Permission};
use edgeop::error::Result;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{confirm_destructive, run_list_command};
use crate::cli::{CommandContext, OutputFormat};
use crate::models::AccessKeyDisplay;
use crate::output::{self, json};

/// Run the access-key list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    run_list_command::<AccessKey, AccessKeyDisplay, _, _>(opts, "access keys", |client, _| async move {
        access_key::list(&client).await.map(|page| page.data)
    })
    .await
}

/// Run the access-key get command
pub async fn get(opts: &GlobalOptions, access_key_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let input = GetInput {
        access_key_id: Some(access_key_id.to_string()),
    };

    let key = access_key::get(&ctx.client, &input).await?;
    output::print_one(&AccessKeyDisplay::from(key), ctx.format)
}

/// Run the access-key create command.
///
/// The secret is only returned by this call, so it is printed in every
/// format.
pub async fn create(
    opts: &GlobalOptions,
    description: &str,
    permission: Permission,
    buckets: Vec<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let input = CreateInput {
        description: Some(description.to_string()),
        permission: Some(permission),
        buckets: (!buckets.is_empty()).then_some(buckets),
    };

    let key = access_key::create(&ctx.client, &input).await?;

    if ctx.format == OutputFormat::Json {
        println!("{}", json::format_json(&key)?);
        return Ok(());
    }

    let secret = key.secret_key.clone().unwrap_or_default();
    eprintln!("{} Created access key", "✓".green());
    output::print_one(&AccessKeyDisplay::from(key), ctx.format)?;
    println!();
    println!("  {} {}", "SECRET KEY:".bold(), secret);
    eprintln!(
        "\n{} Store the secret now; it cannot be retrieved again.",
        "⚠".yellow()
    );
    Ok(())
}

/// Run the access-key delete command
pub async fn delete(opts: &GlobalOptions, access_key_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    if !confirm_destructive(
        ctx.yes,
        &format!("Delete access key {}?", access_key_id.bold()),
    )? {
        return Ok(());
    }

    let input = DeleteInput {
        access_key_id: Some(access_key_id.to_string()),
    };
    access_key::delete(&ctx.client, &input).await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_deleted("access_key", access_key_id)?),
        _ => eprintln!("{} Deleted access key {}", "✓".green(), access_key_id),
    }
    Ok(())
}
