use crate::RecordKind;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Expected a JSON object for {kind} {location}")]
    NotAnObject {
        kind: RecordKind,
        location: ErrorLocation,
    },

    #[error("Expected a JSON array of {kind} records {location}")]
    NotAnArray {
        kind: RecordKind,
        location: ErrorLocation,
    },

    #[error("Missing field '{field}' on {kind} {location}")]
    MissingField {
        kind: RecordKind,
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Invalid project status: {value} {location}")]
    InvalidProjectStatus {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn not_an_object(kind: RecordKind) -> Self {
        Self::NotAnObject {
            kind,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_an_array(kind: RecordKind) -> Self {
        Self::NotAnArray {
            kind,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_field(kind: RecordKind, field: &'static str) -> Self {
        Self::MissingField {
            kind,
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
