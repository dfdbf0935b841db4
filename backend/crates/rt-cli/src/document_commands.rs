use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum DocumentCommands {
    /// List the documents visible to the current role
    List {
        /// Only documents of this project
        #[arg(long)]
        project_id: Option<String>,
    },
    /// Register a document link in a project
    Add {
        #[arg(long)]
        project_id: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// URL or repository path of the document
        #[arg(long)]
        url: String,
    },
    /// Delete a document (admin only)
    Delete {
        /// Document ID
        id: String,
    },
}
