use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Research project lifecycle status
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    /// Proposal stage, not yet started
    #[default]
    Planning,
    Active,
    OnHold,
    Completed,
    /// Read-only, hidden from default views
    Archived,
    /// A value the backend sent that this client does not know
    #[serde(untagged)]
    Unknown(String),
}

impl ProjectStatus {
    /// Every status a user may choose when updating a project.
    pub const SELECTABLE: [ProjectStatus; 5] = [
        Self::Planning,
        Self::Active,
        Self::OnHold,
        Self::Completed,
        Self::Archived,
    ];

    /// Convert to wire string representation
    pub fn as_str(&self) -> &str {
        match self {
            Self::Planning => "PLANNING",
            Self::Active => "ACTIVE",
            Self::OnHold => "ON_HOLD",
            Self::Completed => "COMPLETED",
            Self::Archived => "ARCHIVED",
            Self::Unknown(raw) => raw,
        }
    }

    /// Lenient decoding for fetched records; never fails.
    pub fn from_wire(raw: Option<&str>) -> Self {
        match raw {
            Some(s) => Self::from_str(s).unwrap_or_else(|_| Self::Unknown(s.to_string())),
            None => Self::Unknown(String::new()),
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = CoreError;

    /// Strict parsing for user-supplied values.
    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "PLANNING" => Ok(Self::Planning),
            "ACTIVE" => Ok(Self::Active),
            "ON_HOLD" => Ok(Self::OnHold),
            "COMPLETED" => Ok(Self::Completed),
            "ARCHIVED" => Ok(Self::Archived),
            _ => Err(CoreError::InvalidProjectStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
