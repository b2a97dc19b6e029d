/// CLI argument definitions via clap derive.
use clap::{Parser, Subcommand};

/// worldbook — AI's Knowledge Base CLI.
#[derive(Debug, Parser)]
#[command(
    name = "worldbook",
    about = "AI's Knowledge Base CLI\n\n\"Human uses GUI, We uses CLI.\"",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output as JSON.
    #[arg(long)]
    pub json: bool,

    /// Worldbook API base URL.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Print request timing to stderr for debugging.
    #[arg(long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the Dual Protocol Manifesto.
    Manifesto(ManifestoArgs),
    /// Show status.
    Status(StatusArgs),
    /// Search for worldbooks.
    Query(QueryArgs),
    /// Get the worldbook for a service.
    Get(GetArgs),
}

/// Arguments for `worldbook manifesto`.
#[derive(Debug, Parser)]
pub struct ManifestoArgs {
    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `worldbook status`.
#[derive(Debug, Parser)]
pub struct StatusArgs {
    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `worldbook query`.
#[derive(Debug, Parser)]
pub struct QueryArgs {
    /// Search query string.
    pub query: String,

    /// Maximum number of results to return.
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub limit: u32,

    /// Result offset.
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub offset: u32,

    /// Filter by category.
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,

    /// Worldbook API base URL.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}

/// Arguments for `worldbook get`.
#[derive(Debug, Parser)]
pub struct GetArgs {
    /// Service to fetch the worldbook for.
    pub service: String,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,

    /// Worldbook API base URL.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}
