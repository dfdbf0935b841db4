use serde::{Deserialize, Serialize};

pub const SESSION_SCHEMA_VERSION: i32 = 1;

/// Credential persisted between `rt` invocations.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub credential: String,
    /// RFC 3339
    pub saved_at: String,
    pub schema_version: i32,
}

impl std::fmt::Debug for StoredSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredSession")
            .field("credential", &"<redacted>")
            .field("saved_at", &self.saved_at)
            .field("schema_version", &self.schema_version)
            .finish()
    }
}
