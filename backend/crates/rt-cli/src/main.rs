//! rt - Research Tracker CLI
//!
//! Logs in against the research tracker backend and works with projects,
//! milestones and documents as the logged-in role allows.
//!
//! # Examples
//!
//! ```bash
//! # Log in (the credential is kept in .rt/session.json)
//! rt login --username alice --password secret
//!
//! # What may I do?
//! rt capabilities --pretty
//!
//! # Projects visible to my role
//! rt project list
//!
//! # Update status (ADMIN or PI)
//! rt project status <id> active
//! ```

use rt_cli::{App, Cli, CliErrorResult, Session, logger};

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    let value = match run(cli).await {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let output = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing response: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliErrorResult<serde_json::Value> {
    // Load and validate configuration
    let mut config = rt_config::Config::load()?;

    if let Some(api_url) = cli.api_url {
        config.api.base_url = api_url;
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = rt_config::LogLevel::parse(level);
    }

    config.validate()?;

    // Relative log files live in the config dir
    let log_file = match config.logging.file {
        Some(ref file) => Some(rt_config::Config::config_dir()?.join(file)),
        None => None,
    };
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;
    config.log_summary();

    let session = Session::open(config.session_path()?)?;
    let mut app = App::new(
        &config.api.base_url,
        Duration::from_secs(config.api.timeout_secs),
        session,
    );

    app.execute(cli.command).await
}
