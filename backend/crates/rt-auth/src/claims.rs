use crate::{DecodeError, DecodeResult, Role};

use rt_core::value::{first_field_string, scalar_string};

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Payload keys for the acting user's identity, highest precedence first.
const SUBJECT_KEYS: [&str; 3] = ["sub", "username", "userId"];
/// Payload keys for the id used in ownership comparisons.
const USER_ID_KEYS: [&str; 3] = ["id", "userId", "sub"];

/// Normalized identity decoded from a credential payload.
///
/// The backend has issued tokens with the identity under several names, so
/// each field is filled from an ordered fallback chain (see
/// [`Claims::from_payload`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Claims {
    /// Stable identifier of the acting user
    pub subject: String,
    pub role: Role,
    /// Secondary identifier matched against record ownership ids
    pub user_id: Option<String>,
    /// From the standard `exp` claim, when present
    pub expires_at: Option<DateTime<Utc>>,
}

impl Claims {
    pub fn new(subject: impl Into<String>, role: Role, user_id: Option<String>) -> Self {
        Self {
            subject: subject.into(),
            role,
            user_id,
            expires_at: None,
        }
    }

    /// Build claims from a decoded payload object.
    ///
    /// - `subject`: `sub`, else `username`, else `userId`
    /// - `role`: `role`, else the first entry of `authorities`, else MEMBER
    /// - `user_id`: `id`, else `userId`, else `sub`
    ///
    /// String and numeric values are accepted; empty strings and nulls count
    /// as absent.
    #[track_caller]
    pub fn from_payload(payload: &Value) -> DecodeResult<Self> {
        let Some(subject) = first_field_string(payload, &SUBJECT_KEYS) else {
            return Err(DecodeError::missing_subject());
        };

        Ok(Self {
            subject,
            role: role_claim(payload),
            user_id: first_field_string(payload, &USER_ID_KEYS),
            expires_at: payload
                .get("exp")
                .and_then(Value::as_i64)
                .and_then(|secs| DateTime::from_timestamp(secs, 0)),
        })
    }

    /// Id to send when the backend asks "who is doing this".
    pub fn acting_user_id(&self) -> &str {
        self.user_id.as_deref().unwrap_or(&self.subject)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now)
    }
}

fn role_claim(payload: &Value) -> Role {
    match payload.get("role") {
        Some(Value::Null) | None => {}
        Some(Value::String(role)) if role.is_empty() => {}
        Some(role) => return scalar_string(role).map_or(Role::Unknown, |r| Role::parse(&r)),
    }

    let Some(first) = payload
        .get("authorities")
        .and_then(Value::as_array)
        .and_then(|authorities| authorities.first())
    else {
        return Role::Member;
    };

    // Either "ROLE_PI" or { "authority": "ROLE_PI" }
    first
        .as_str()
        .or_else(|| first.get("authority").and_then(Value::as_str))
        .map_or(Role::Unknown, Role::parse)
}
