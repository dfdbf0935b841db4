use crate::value::field_string;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A user as embedded in other records (project members, PI, uploader).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: Option<String>,
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub role: Option<String>,
}

impl UserRef {
    /// Returns `None` unless `value` is an object carrying an id or username.
    pub fn from_json(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }

        let user = Self {
            id: field_string(value, "id"),
            username: field_string(value, "username"),
            full_name: field_string(value, "fullName"),
            role: field_string(value, "role"),
        };

        (user.id.is_some() || user.username.is_some()).then_some(user)
    }
}
