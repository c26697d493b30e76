//! edgeop CLI - command line companion for the edge cloud management API

use std::io;

use clap::{CommandFactory, Parser};
use log::LevelFilter;

mod cli;
mod models;
mod output;

use cli::args::GlobalOptions;
use cli::{AccessKeyCommands, AclCommands, Cli, Commands, DomainCommands, WorkspaceCommands};
use edgeop::error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let mut builder = if debug {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(LevelFilter::Debug);
        builder
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
    };
    builder.format_timestamp(None).init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("edgeop version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Acl(cmd) => match cmd {
            AclCommands::List => cli::acl::list(&opts).await,
            AclCommands::Get { acl_id } => cli::acl::get(&opts, &acl_id).await,
            AclCommands::Create { name } => cli::acl::create(&opts, &name).await,
            AclCommands::Delete { acl_id } => cli::acl::delete(&opts, &acl_id).await,
            AclCommands::Entries { acl_id, pagination } => {
                cli::acl::entries(&opts, &acl_id, &pagination).await
            }
            AclCommands::AddEntry {
                acl_id,
                prefix,
                action,
            } => cli::acl::add_entry(&opts, &acl_id, &prefix, action).await,
            AclCommands::RemoveEntry { acl_id, prefix } => {
                cli::acl::remove_entry(&opts, &acl_id, &prefix).await
            }
            AclCommands::Lookup { acl_id, ip } => cli::acl::lookup(&opts, &acl_id, &ip).await,
        },
        Commands::Domain(cmd) => match cmd {
            DomainCommands::List {
                fqdn,
                service_id,
                sort,
                pagination,
            } => {
                let filters = cli::domain::DomainFilters {
                    fqdn,
                    service_id,
                    sort,
                };
                cli::domain::list(&opts, filters, &pagination).await
            }
            DomainCommands::Get { domain_id } => cli::domain::get(&opts, &domain_id).await,
            DomainCommands::Create {
                fqdn,
                service_id,
                description,
            } => cli::domain::create(&opts, &fqdn, service_id, description).await,
            DomainCommands::Update {
                domain_id,
                service_id,
                description,
            } => cli::domain::update(&opts, &domain_id, service_id, description).await,
            DomainCommands::Delete { domain_id } => cli::domain::delete(&opts, &domain_id).await,
        },
        Commands::AccessKey(cmd) => match cmd {
            AccessKeyCommands::List => cli::access_key::list(&opts).await,
            AccessKeyCommands::Get { access_key_id } => {
                cli::access_key::get(&opts, &access_key_id).await
            }
            AccessKeyCommands::Create {
                description,
                permission,
                buckets,
            } => cli::access_key::create(&opts, &description, permission, buckets).await,
            AccessKeyCommands::Delete { access_key_id } => {
                cli::access_key::delete(&opts, &access_key_id).await
            }
        },
        Commands::Workspace(cmd) => match cmd {
            WorkspaceCommands::List { mode, pagination } => {
                cli::workspace::list(&opts, mode, &pagination).await
            }
            WorkspaceCommands::Get { workspace_id } => {
                cli::workspace::get(&opts, &workspace_id).await
            }
            WorkspaceCommands::Create {
                name,
                description,
                mode,
                blocking_code,
            } => cli::workspace::create(&opts, &name, &description, mode, blocking_code).await,
            WorkspaceCommands::Delete { workspace_id } => {
                cli::workspace::delete(&opts, &workspace_id).await
            }
        },
        Commands::Completion { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "edgeop", &mut io::stdout());
            Ok(())
        }
    }
}
