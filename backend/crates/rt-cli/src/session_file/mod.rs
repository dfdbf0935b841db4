//! Login session persisted as JSON next to the config file.
//!
//! The file holds only the raw credential plus bookkeeping. Claims are
//! re-derived on every load, so nothing decoded is ever trusted from disk.

pub(crate) mod error;
pub(crate) mod load_result;
pub(crate) mod stored_session;

pub use error::{Result as SessionResult, SessionError};
pub use load_result::LoadResult;
pub use stored_session::{SESSION_SCHEMA_VERSION, StoredSession};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use log::{debug, info, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Loads the session file.
///
/// Returns:
/// - `Ok(LoadResult { session: Some(...), corruption_error: None })` - loaded successfully
/// - `Ok(LoadResult { session: None, corruption_error: None })` - no file (logged out)
/// - `Ok(LoadResult { session: None, corruption_error: Some(...) })` - file exists but corrupted
pub fn load(path: &Path) -> SessionResult<LoadResult> {
    if !path.exists() {
        debug!("No session file at {path:?}");
        return Ok(LoadResult::empty());
    }

    let contents =
        fs::read_to_string(path).map_err(|e| SessionError::file_read(path.to_path_buf(), e))?;

    match serde_json::from_str::<StoredSession>(&contents) {
        Ok(session) if session.schema_version != SESSION_SCHEMA_VERSION => {
            warn!(
                "Session file at {path:?} has unsupported schema v{}",
                session.schema_version
            );
            Ok(LoadResult::corrupted(format!(
                "unsupported schema version {}",
                session.schema_version
            )))
        }
        Ok(session) if session.credential.trim().is_empty() => {
            warn!("Session file at {path:?} has an empty credential");
            Ok(LoadResult::corrupted("empty credential"))
        }
        Ok(session) => {
            debug!(
                "Loaded session saved at {} (schema v{})",
                session.saved_at, session.schema_version
            );
            Ok(LoadResult {
                session: Some(session),
                corruption_error: None,
            })
        }
        Err(e) => {
            warn!("Session file corrupted at {path:?}: {e}");
            Ok(LoadResult::corrupted(e.to_string()))
        }
    }
}

/// Loads the session file, moving a corrupted one aside.
///
/// A corrupted file reads as logged out.
pub fn load_or_recover(path: &Path) -> SessionResult<LoadResult> {
    let result = load(path)?;

    if result.corruption_error.is_some() {
        backup_corrupted(path)?;
    }

    Ok(result)
}

/// Saves the credential using atomic write pattern.
///
/// 1. Writes to temp file
/// 2. Syncs to disk (fsync)
/// 3. Atomic rename to final location
pub fn save(path: &Path, credential: &str) -> SessionResult<StoredSession> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| SessionError::dir_creation(parent.to_path_buf(), e))?;
    }

    let session = StoredSession {
        credential: credential.to_string(),
        saved_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        schema_version: SESSION_SCHEMA_VERSION,
    };

    let temp_path = sibling(path, &format!("tmp.{}", std::process::id()));

    // Pretty printing for debuggability
    let json = serde_json::to_string_pretty(&session)?;

    {
        let mut file = fs::File::create(&temp_path)
            .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

        restrict_permissions(&file).map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

        file.write_all(json.as_bytes())
            .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

        file.sync_all()
            .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;
    }

    fs::rename(&temp_path, path).map_err(|e| {
        // Clean up temp file on failure
        let _ = fs::remove_file(&temp_path);
        SessionError::atomic_rename(temp_path.clone(), path.to_path_buf(), e)
    })?;

    info!("Saved session to {path:?}");
    Ok(session)
}

/// Removes the session file. Returns whether a file was removed.
pub fn clear(path: &Path) -> SessionResult<bool> {
    if !path.exists() {
        return Ok(false);
    }

    fs::remove_file(path).map_err(|e| SessionError::file_remove(path.to_path_buf(), e))?;

    info!("Removed session file {path:?}");
    Ok(true)
}

/// Backs up a corrupted session file for debugging.
///
/// Renames `session.json` to `session.json.corrupted.{timestamp}`.
pub fn backup_corrupted(path: &Path) -> SessionResult<Option<PathBuf>> {
    if !path.exists() {
        return Ok(None);
    }

    let timestamp = Utc::now().format(DATE_FORMAT);
    let backup_path = sibling(path, &format!("corrupted.{timestamp}"));

    fs::rename(path, &backup_path).map_err(SessionError::backup_failed)?;

    warn!("Backed up corrupted session to {backup_path:?}");
    Ok(Some(backup_path))
}

/// `dir/session.json` + `suffix` -> `dir/session.json.suffix`
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}

#[cfg(unix)]
fn restrict_permissions(file: &fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    file.set_permissions(fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_file: &fs::File) -> std::io::Result<()> {
    Ok(())
}
