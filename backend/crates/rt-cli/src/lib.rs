//! rt-cli library
//!
//! The REST client, session persistence and command execution behind the
//! `rt` binary, exported for tests.

pub mod app;
pub mod cli;
pub mod client;
pub mod commands;
pub mod document_commands;
pub mod error;
pub mod logger;
pub mod milestone_commands;
pub mod project_commands;
pub mod session;
pub mod session_file;
pub mod token_commands;

#[cfg(test)]
mod tests;

pub use app::App;
pub use cli::Cli;
pub use client::{CliClientResult, Client, ClientError};
pub use error::{CliError, Result as CliErrorResult};
pub use session::Session;
pub use session_file::{LoadResult, SessionError, SessionResult, StoredSession};
