use serde::{Deserialize, Serialize};

/// Spring Security prefixes granted authorities with this.
const AUTHORITY_PREFIX: &str = "ROLE_";

/// Application role carried in the credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    /// Principal investigator
    Pi,
    Member,
    /// Present in the credential but not a role this client knows
    Unknown,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Pi => "PI",
            Self::Member => "MEMBER",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Total parse: case-insensitive, tolerates an authority prefix.
    pub fn parse(raw: &str) -> Self {
        let upper = raw.trim().to_ascii_uppercase();
        let name = upper.strip_prefix(AUTHORITY_PREFIX).unwrap_or(&upper);

        match name {
            "ADMIN" => Self::Admin,
            "PI" => Self::Pi,
            "MEMBER" => Self::Member,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
