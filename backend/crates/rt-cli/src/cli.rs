use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "rt")]
#[command(about = "Research tracker CLI: role-aware access to projects, milestones and documents")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides config.toml and RT_API_BASE_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Log level (overrides config.toml and RT_LOG_LEVEL)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
