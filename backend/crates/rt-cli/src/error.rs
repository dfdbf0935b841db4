use crate::{ClientError, SessionError};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] rt_config::ConfigError),

    #[error("{0}")]
    Client(#[from] ClientError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Access denied: {0}")]
    Access(#[from] rt_auth::AccessError),

    #[error("Credential rejected: {0}")]
    Credential(#[from] rt_auth::DecodeError),

    #[error("Unexpected response: {0}")]
    Record(#[from] rt_core::CoreError),

    #[error("{kind} {id} not found or not visible {location}")]
    NotFound {
        kind: rt_core::RecordKind,
        id: String,
        location: ErrorLocation,
    },

    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("Invalid argument: {message} {location}")]
    InvalidArgument {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(kind: rt_core::RecordKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
