use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum MilestoneCommands {
    /// List the milestones visible to the current role
    List {
        /// Only milestones of this project
        #[arg(long)]
        project_id: Option<String>,
    },
    /// Create a milestone in a project
    Create {
        #[arg(long)]
        project_id: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due_date: Option<String>,
    },
    /// Mark a milestone completed
    Complete {
        /// Milestone ID
        id: String,
    },
    /// Delete a milestone (admin only)
    Delete {
        /// Milestone ID
        id: String,
    },
}
