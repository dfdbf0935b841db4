use crate::{
    document_commands::DocumentCommands, milestone_commands::MilestoneCommands,
    project_commands::ProjectCommands, token_commands::TokenCommands,
};

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and persist the credential
    Login {
        #[arg(long, short)]
        username: String,
        /// Falls back to RT_PASSWORD when omitted
        #[arg(long, short)]
        password: Option<String>,
    },

    /// Create an account, then log in with `login`
    Register {
        #[arg(long)]
        full_name: String,
        #[arg(long, short)]
        username: String,
        /// Falls back to RT_PASSWORD when omitted
        #[arg(long, short)]
        password: Option<String>,
    },

    /// Forget the persisted credential
    Logout,

    /// Show the decoded claims of the current session
    Whoami,

    /// Show what the current role may do
    Capabilities,

    /// Credential utilities
    Token {
        #[command(subcommand)]
        action: TokenCommands,
    },

    /// Project operations
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },

    /// Milestone operations
    Milestone {
        #[command(subcommand)]
        action: MilestoneCommands,
    },

    /// Document operations
    Document {
        #[command(subcommand)]
        action: DocumentCommands,
    },
}
