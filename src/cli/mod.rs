//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

use edgeop::api::access_key::Permission;
use edgeop::api::acl::AclAction;
use edgeop::api::ngwaf::workspace::WorkspaceMode;

pub mod access_key;
pub mod acl;
pub mod args;
pub mod context;
pub mod domain;
pub mod handlers;
pub mod init;
pub mod status;
pub mod workspace;

pub use args::{CursorArgs, OutputFormat, PageArgs};
pub use context::CommandContext;

/// edgeop - command line companion for the edge cloud management API
#[derive(Parser, Debug)]
#[command(name = "edgeop")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "EDGEOP_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "EDGEOP_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// API key (overrides the config file)
    #[arg(
        long,
        global = true,
        env = "EDGEOP_API_KEY",
        hide_env = true,
        hide_env_values = true
    )]
    pub api_key: Option<String>,

    /// API host (overrides the config file)
    #[arg(long, global = true, env = "EDGEOP_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "EDGEOP_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Answer yes to confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize edgeop configuration
    Init,

    /// Show authentication and configuration status
    Status,

    /// Display version information
    Version,

    /// Manage compute ACLs
    #[command(subcommand)]
    Acl(AclCommands),

    /// Manage domains
    #[command(subcommand)]
    Domain(DomainCommands),

    /// Manage object storage access keys
    #[command(subcommand)]
    AccessKey(AccessKeyCommands),

    /// Manage NGWAF workspaces
    #[command(subcommand)]
    Workspace(WorkspaceCommands),

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   edgeop completion bash > /etc/bash_completion.d/edgeop
  zsh:    edgeop completion zsh > \"${fpath[1]}/_edgeop\"
  fish:   edgeop completion fish > ~/.config/fish/completions/edgeop.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Compute ACL subcommands
#[derive(Subcommand, Debug)]
pub enum AclCommands {
    /// List all ACLs
    List,

    /// Show one ACL
    Get {
        /// ACL ID
        acl_id: String,
    },

    /// Create an empty ACL
    Create {
        /// ACL name
        name: String,
    },

    /// Delete an ACL
    Delete {
        /// ACL ID
        acl_id: String,
    },

    /// List the prefixes in an ACL
    Entries {
        /// ACL ID
        acl_id: String,

        #[command(flatten)]
        pagination: CursorArgs,
    },

    /// Add or replace a prefix
    AddEntry {
        /// ACL ID
        acl_id: String,

        /// IP prefix in CIDR notation (e.g. 192.0.2.0/24)
        prefix: String,

        /// Action for matching requests (allow, block)
        #[arg(long, short = 'a', default_value = "BLOCK")]
        action: AclAction,
    },

    /// Remove a prefix
    RemoveEntry {
        /// ACL ID
        acl_id: String,

        /// IP prefix in CIDR notation
        prefix: String,
    },

    /// Find the entry matching an IP address
    Lookup {
        /// ACL ID
        acl_id: String,

        /// IPv4 or IPv6 address
        ip: String,
    },
}

/// Domain subcommands
#[derive(Subcommand, Debug)]
pub enum DomainCommands {
    /// List domains
    List {
        /// Filter by exact FQDN
        #[arg(long)]
        fqdn: Option<String>,

        /// Filter by service ID
        #[arg(long)]
        service_id: Option<String>,

        /// Sort field, prefix with '-' for descending (e.g. -fqdn)
        #[arg(long, allow_hyphen_values = true)]
        sort: Option<String>,

        #[command(flatten)]
        pagination: CursorArgs,
    },

    /// Show one domain
    Get {
        /// Domain ID
        domain_id: String,
    },

    /// Register a domain
    Create {
        /// Fully qualified domain name
        fqdn: String,

        /// Service to route the domain to
        #[arg(long)]
        service_id: Option<String>,

        /// Free-form description
        #[arg(long, short = 'd')]
        description: Option<String>,
    },

    /// Change a domain's service or description
    Update {
        /// Domain ID
        domain_id: String,

        /// Service to route the domain to
        #[arg(long)]
        service_id: Option<String>,

        /// Free-form description
        #[arg(long, short = 'd')]
        description: Option<String>,
    },

    /// Remove a domain
    Delete {
        /// Domain ID
        domain_id: String,
    },
}

/// Object storage access key subcommands
#[derive(Subcommand, Debug)]
pub enum AccessKeyCommands {
    /// List access keys
    List,

    /// Show one access key
    Get {
        /// Access key ID
        access_key_id: String,
    },

    /// Create an access key and print its secret
    Create {
        /// Description of what the key is for
        #[arg(long, short = 'd')]
        description: String,

        /// read-write-admin, read-only-admin, read-write-objects or read-only-objects
        #[arg(long)]
        permission: Permission,

        /// Limit the key to these buckets (repeatable or comma-separated)
        #[arg(long = "bucket", value_delimiter = ',')]
        buckets: Vec<String>,
    },

    /// Delete an access key
    Delete {
        /// Access key ID
        access_key_id: String,
    },
}

/// NGWAF workspace subcommands
#[derive(Subcommand, Debug)]
pub enum WorkspaceCommands {
    /// List workspaces
    List {
        /// Filter by mode (block, log, off)
        #[arg(long)]
        mode: Option<WorkspaceMode>,

        #[command(flatten)]
        pagination: PageArgs,
    },

    /// Show one workspace
    Get {
        /// Workspace ID
        workspace_id: String,
    },

    /// Create a workspace
    Create {
        /// Workspace name
        name: String,

        /// Free-form description
        #[arg(long, short = 'd')]
        description: String,

        /// Blocking mode (block, log, off)
        #[arg(long, default_value = "log")]
        mode: WorkspaceMode,

        /// Response code for blocked requests
        #[arg(long)]
        blocking_code: Option<u16>,
    },

    /// Delete a workspace
    Delete {
        /// Workspace ID
        workspace_id: String,
    },
}
