use crate::session_file::stored_session::StoredSession;

/// Result of loading the session - distinguishes "not found" from errors.
#[derive(Debug)]
pub struct LoadResult {
    pub session: Option<StoredSession>,
    /// Present if file exists but is corrupted
    pub corruption_error: Option<String>,
}

impl LoadResult {
    pub(crate) fn empty() -> Self {
        Self {
            session: None,
            corruption_error: None,
        }
    }

    pub(crate) fn corrupted(message: impl Into<String>) -> Self {
        Self {
            session: None,
            corruption_error: Some(message.into()),
        }
    }

    pub fn credential(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.credential.as_str())
    }
}
