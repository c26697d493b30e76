//! NGWAF workspace commands

use colored::Colorize;

use edgeop::api::ngwaf::workspace::{
    self, CreateInput, DeleteInput, GetInput, ListInput, Workspace, WorkspaceMode,
};
use edgeop::error::Result;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{confirm_destructive, run_list_command};
use crate::cli::{CommandContext, OutputFormat, PageArgs};
use crate::models::WorkspaceDisplay;
use crate::output::{self, json};

/// Run the workspace list command
pub async fn list(
    opts: &GlobalOptions,
    mode: Option<WorkspaceMode>,
    pagination: &PageArgs,
) -> Result<()> {
    let page = pagination.page;
    let limit = pagination.limit;

    run_list_command::<Workspace, WorkspaceDisplay, _, _>(
        opts,
        "workspaces",
        |client, default_size| async move {
            let input = ListInput {
                limit: Some(limit.unwrap_or(default_size)),
                mode,
                page,
            };
            workspace::list(&client, &input).await.map(|page| page.data)
        },
    )
    .await
}

/// Run the workspace get command
pub async fn get(opts: &GlobalOptions, workspace_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let input = GetInput {
        workspace_id: Some(workspace_id.to_string()),
    };

    let ws = workspace::get(&ctx.client, &input).await?;
    output::print_one(&WorkspaceDisplay::from(ws), ctx.format)
}

/// Run the workspace create command
pub async fn create(
    opts: &GlobalOptions,
    name: &str,
    description: &str,
    mode: WorkspaceMode,
    blocking_code: Option<u16>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let input = CreateInput {
        name: Some(name.to_string()),
        description: Some(description.to_string()),
        mode: Some(mode),
        default_blocking_response_code: blocking_code,
        ..Default::default()
    };

    let ws = workspace::create(&ctx.client, &input).await?;
    if ctx.format != OutputFormat::Json {
        eprintln!(
            "{} Created workspace {} in {} mode",
            "✓".green(),
            ws.name.bold(),
            ws.mode
        );
    }
    output::print_one(&WorkspaceDisplay::from(ws), ctx.format)
}

/// Run the workspace delete command
pub async fn delete(opts: &GlobalOptions, workspace_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    if !confirm_destructive(
        ctx.yes,
        &format!(
            "Delete workspace {} with all its rules, lists and alerts?",
            workspace_id.bold()
        ),
    )? {
        return Ok(());
    }

    let input = DeleteInput {
        workspace_id: Some(workspace_id.to_string()),
    };
    workspace::delete(&ctx.client, &input).await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_deleted("workspace", workspace_id)?),
        _ => eprintln!("{} Deleted workspace {}", "✓".green(), workspace_id),
    }
    Ok(())
}
