//! Domain commands

use colored::Colorize;

use edgeop::api::domain::{self, CreateInput, DeleteInput, Domain, GetInput, ListInput, UpdateInput};
use edgeop::client::paginate;
use edgeop::error::{Error, Result};

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{collect_with_progress, confirm_destructive, run_list_command};
use crate::cli::{CommandContext, CursorArgs, OutputFormat};
use crate::models::DomainDisplay;
use crate::output::{self, json};

/// Filters accepted by `domain list`
#[derive(Debug, Clone, Default)]
pub struct DomainFilters {
    pub fqdn: Option<String>,
    pub service_id: Option<String>,
    pub sort: Option<String>,
}

/// Run the domain list command
pub async fn list(
    opts: &GlobalOptions,
    filters: DomainFilters,
    pagination: &CursorArgs,
) -> Result<()> {
    let pagination = pagination.clone();

    run_list_command::<Domain, DomainDisplay, _, _>(opts, "domains", |client, default_size| async move {
        let base = ListInput {
            cursor: pagination.cursor.clone(),
            fqdn: filters.fqdn,
            limit: Some(pagination.page_size(default_size)),
            service_id: filters.service_id,
            sort: filters.sort,
        };

        if pagination.all {
            let stream = paginate(|cursor| {
                let client = client.clone();
                let input = ListInput {
                    cursor,
                    ..base.clone()
                };
                async move { domain::list(&client, &input).await }
            });
            return collect_with_progress(stream, "domains").await;
        }

        let page = domain::list(&client, &base).await?;
        if let Some(next) = page.meta.next_cursor() {
            eprintln!("{} --cursor {}", "More domains:".dimmed(), next);
        }
        Ok::<_, Error>(page.data)
    })
    .await
}

/// Run the domain get command
pub async fn get(opts: &GlobalOptions, domain_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let input = GetInput {
        domain_id: Some(domain_id.to_string()),
    };

    let found = domain::get(&ctx.client, &input).await?;
    output::print_one(&DomainDisplay::from(found), ctx.format)
}

/// Run the domain create command
pub async fn create(
    opts: &GlobalOptions,
    fqdn: &str,
    service_id: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let input = CreateInput {
        fqdn: Some(fqdn.to_string()),
        service_id,
        description,
    };

    let created = domain::create(&ctx.client, &input).await?;
    if ctx.format != OutputFormat::Json {
        eprintln!("{} Registered {}", "✓".green(), created.fqdn.bold());
    }
    output::print_one(&DomainDisplay::from(created), ctx.format)
}

/// Run the domain update command
pub async fn update(
    opts: &GlobalOptions,
    domain_id: &str,
    service_id: Option<String>,
    description: Option<String>,
) -> Result<()> {
    if service_id.is_none() && description.is_none() {
        return Err(Error::Other(
            "Nothing to update; pass --service-id and/or --description".to_string(),
        ));
    }

    let ctx = CommandContext::new(opts)?;
    let input = UpdateInput {
        domain_id: Some(domain_id.to_string()),
        service_id,
        description,
    };

    let updated = domain::update(&ctx.client, &input).await?;
    if ctx.format != OutputFormat::Json {
        eprintln!("{} Updated {}", "✓".green(), updated.fqdn.bold());
    }
    output::print_one(&DomainDisplay::from(updated), ctx.format)
}

/// Run the domain delete command
pub async fn delete(opts: &GlobalOptions, domain_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    if !confirm_destructive(ctx.yes, &format!("Delete domain {}?", domain_id.bold()))? {
        return Ok(());
    }

    let input = DeleteInput {
        domain_id: Some(domain_id.to_string()),
    };
    domain::delete(&ctx.client, &input).await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_deleted("domain", domain_id)?),
        _ => eprintln!("{} Deleted domain {}", "✓".green(), domain_id),
    }
    Ok(())
}
