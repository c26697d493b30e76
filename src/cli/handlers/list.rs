//! Generic list command handlers
//!
//! List commands follow the same flow:
//! 1. Create command context
//! 2. Fetch one page, or every page with `--all`
//! 3. Convert to display type
//! 4. Print output

use std::future::Future;

use futures::{Stream, StreamExt, pin_mut};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use serde::Serialize;
use tabled::Tabled;

use edgeop::client::Client;
use edgeop::error::Result;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::output::Formattable;

/// Run a list command with the common fetch → display → print pattern.
///
/// # Type Parameters
///
/// * `T` - The API model type returned by the fetcher (e.g. `Domain`)
/// * `D` - The display type that implements `From<T>`, `Tabled`, and `Serialize`
///
/// # Example
///
/// ```ignore
/// run_list_command::<ComputeAcl, AclDisplay, _, _>(opts, "ACLs", |client, _| async move {
///     Ok(acl::list(&client).await?.data)
/// })
/// .await
/// ```
pub async fn run_list_command<T, D, Fut, F>(
    opts: &GlobalOptions,
    resource_name: &str,
    fetcher: F,
) -> Result<()>
where
    D: From<T> + Tabled + Serialize,
    Fut: Future<Output = Result<Vec<T>>>,
    F: FnOnce(Client, u32) -> Fut,
{
    let ctx = CommandContext::new(opts)?;

    debug!("Fetching {}", resource_name);
    let items = fetcher(ctx.client.clone(), ctx.page_size()).await?;
    debug!("Fetched {} {}", items.len(), resource_name);

    let display_items: Vec<D> = items.into_iter().map(D::from).collect();
    display_items.print(ctx.format)?;

    Ok(())
}

/// Drain a paginated stream behind a spinner.
///
/// The spinner draws to stderr and hides itself when stderr is not a
/// terminal, so piped JSON output stays clean.
pub async fn collect_with_progress<T, S>(stream: S, resource_name: &str) -> Result<Vec<T>>
where
    S: Stream<Item = Result<T>>,
{
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner.set_message(format!("Fetching {resource_name}..."));

    pin_mut!(stream);
    let mut items = Vec::new();
    while let Some(item) = stream.next().await {
        match item {
            Ok(item) => {
                items.push(item);
                spinner.set_message(format!("Fetched {} {resource_name}", items.len()));
            }
            Err(e) => {
                spinner.finish_and_clear();
                return Err(e);
            }
        }
    }

    spinner.finish_and_clear();
    Ok(items)
}
