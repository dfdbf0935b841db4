use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// List the projects visible to the current role
    List,
    /// Get a project by ID
    Get {
        /// Project ID
        id: String,
    },
    /// Create a project (admin only)
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start_date: String,
        /// End date (YYYY-MM-DD), not before the start date
        #[arg(long)]
        end_date: String,
    },
    /// Change a project's status
    Status {
        /// Project ID
        id: String,
        /// New status (planning, active, on-hold, completed, archived)
        status: String,
    },
    /// Delete a project (admin only)
    Delete {
        /// Project ID
        id: String,
    },
}
