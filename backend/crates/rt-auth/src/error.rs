use crate::{Capability, Role};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Why a credential could not be turned into [`Claims`](crate::Claims).
///
/// Every variant means the same thing to callers: the actor is not
/// authenticated.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Malformed credential: {message} {location}")]
    Malformed {
        message: String,
        location: ErrorLocation,
    },

    #[error("Credential has no subject claim (sub, username or userId) {location}")]
    MissingSubject { location: ErrorLocation },

    #[error("Credential for {subject} has expired {location}")]
    Expired {
        subject: String,
        location: ErrorLocation,
    },
}

impl DecodeError {
    #[track_caller]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_subject() -> Self {
        Self::MissingSubject {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn expired(subject: impl Into<String>) -> Self {
        Self::Expired {
            subject: subject.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Malformed { .. } => "MALFORMED_CREDENTIAL",
            Self::MissingSubject { .. } => "MISSING_SUBJECT",
            Self::Expired { .. } => "EXPIRED_CREDENTIAL",
        }
    }
}

/// A UI action was attempted without the capability that gates it.
#[derive(Error, Debug)]
pub enum AccessError {
    #[error("Not logged in {location}")]
    Unauthenticated { location: ErrorLocation },

    #[error("Role {role} does not grant {capability} {location}")]
    Denied {
        capability: Capability,
        role: Role,
        location: ErrorLocation,
    },
}

impl AccessError {
    #[track_caller]
    pub fn unauthenticated() -> Self {
        Self::Unauthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn denied(capability: Capability, role: Role) -> Self {
        Self::Denied {
            capability,
            role,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type DecodeResult<T> = std::result::Result<T, DecodeError>;
pub type AccessResult<T> = std::result::Result<T, AccessError>;
