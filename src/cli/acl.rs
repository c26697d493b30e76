//! Compute ACL commands

use colored::Colorize;
use log::debug;

use edgeop::api::acl::{
    self, AclAction, AclEntry, BatchEntry, ComputeAcl, CreateInput, DeleteInput, DescribeInput,
    ListEntriesInput, LookupInput, UpdateInput,
};
use edgeop::client::paginate;
use edgeop::error::{Error, Result};

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{collect_with_progress, confirm_destructive, run_list_command};
use crate::cli::{CommandContext, CursorArgs, OutputFormat};
use crate::models::{AclDisplay, AclEntryDisplay};
use crate::output::{self, json};

/// Run the acl list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    run_list_command::<ComputeAcl, AclDisplay, _, _>(opts, "ACLs", |client, _| async move {
        acl::list(&client).await.map(|page| page.data)
    })
    .await
}

/// Run the acl get command
pub async fn get(opts: &GlobalOptions, acl_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let input = DescribeInput {
        acl_id: Some(acl_id.to_string()),
    };

    let found = acl::describe(&ctx.client, &input).await?;
    output::print_one(&AclDisplay::from(found), ctx.format)
}

/// Run the acl create command
pub async fn create(opts: &GlobalOptions, name: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let input = CreateInput {
        name: Some(name.to_string()),
    };

    let created = acl::create(&ctx.client, &input).await?;
    if ctx.format != OutputFormat::Json {
        eprintln!("{} Created ACL {}", "✓".green(), created.name.bold());
    }
    output::print_one(&AclDisplay::from(created), ctx.format)
}

/// Run the acl delete command
pub async fn delete(opts: &GlobalOptions, acl_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    if !confirm_destructive(ctx.yes, &format!("Delete ACL {}?", acl_id.bold()))? {
        return Ok(());
    }

    let input = DeleteInput {
        acl_id: Some(acl_id.to_string()),
    };
    acl::delete(&ctx.client, &input).await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_deleted("acl", acl_id)?),
        _ => eprintln!("{} Deleted ACL {}", "✓".green(), acl_id),
    }
    Ok(())
}

/// Run the acl entries command.
///
/// Without `--all` one page is printed and the next cursor, if any, is
/// reported on stderr.
pub async fn entries(opts: &GlobalOptions, acl_id: &str, pagination: &CursorArgs) -> Result<()> {
    let acl_id = acl_id.to_string();
    let pagination = pagination.clone();

    run_list_command::<AclEntry, AclEntryDisplay, _, _>(
        opts,
        "ACL entries",
        |client, default_size| async move {
            let limit = Some(pagination.page_size(default_size));

            if pagination.all {
                let stream = paginate(|cursor| {
                    let client = client.clone();
                    let input = ListEntriesInput {
                        acl_id: Some(acl_id.clone()),
                        cursor,
                        limit,
                    };
                    async move { acl::list_entries(&client, &input).await }
                });
                return collect_with_progress(stream, "ACL entries").await;
            }

            let input = ListEntriesInput {
                acl_id: Some(acl_id.clone()),
                cursor: pagination.cursor.clone(),
                limit,
            };
            let page = acl::list_entries(&client, &input).await?;
            if let Some(next) = page.meta.next_cursor() {
                eprintln!("{} --cursor {}", "More entries:".dimmed(), next);
            }
            Ok::<_, Error>(page.entries)
        },
    )
    .await
}

/// Run the acl add-entry command
pub async fn add_entry(
    opts: &GlobalOptions,
    acl_id: &str,
    prefix: &str,
    action: AclAction,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let input = UpdateInput {
        acl_id: Some(acl_id.to_string()),
        entries: Some(vec![BatchEntry::update(prefix, action)]),
    };

    debug!("Upserting {} as {} in {}", prefix, action, acl_id);
    acl::update(&ctx.client, &input).await?;

    eprintln!(
        "{} {} {} in ACL {}",
        "✓".green(),
        action,
        prefix.bold(),
        acl_id
    );
    Ok(())
}

/// Run the acl remove-entry command
pub async fn remove_entry(opts: &GlobalOptions, acl_id: &str, prefix: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    if !confirm_destructive(
        ctx.yes,
        &format!("Remove {} from ACL {}?", prefix.bold(), acl_id),
    )? {
        return Ok(());
    }

    let input = UpdateInput {
        acl_id: Some(acl_id.to_string()),
        entries: Some(vec![BatchEntry::delete(prefix)]),
    };
    acl::update(&ctx.client, &input).await?;

    eprintln!("{} Removed {} from ACL {}", "✓".green(), prefix, acl_id);
    Ok(())
}

/// Run the acl lookup command
pub async fn lookup(opts: &GlobalOptions, acl_id: &str, ip: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let input = LookupInput {
        acl_id: Some(acl_id.to_string()),
        ip: Some(ip.to_string()),
    };

    match acl::lookup(&ctx.client, &input).await? {
        Some(entry) => output::print_one(&AclEntryDisplay::from(entry), ctx.format),
        None => {
            if ctx.format == OutputFormat::Json {
                println!("{}", json::format_json(&serde_json::Value::Null)?);
            } else {
                eprintln!("No entry in ACL {} matches {}", acl_id, ip.bold());
            }
            Ok(())
        }
    }
}
