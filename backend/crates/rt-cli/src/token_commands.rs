use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum TokenCommands {
    /// Decode a credential's claims without verifying it
    Decode {
        /// Credential to decode (defaults to the current session)
        credential: Option<String>,
    },
}
