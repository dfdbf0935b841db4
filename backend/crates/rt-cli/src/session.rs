use crate::error::Result as CliErrorResult;
use crate::session_file;

use std::path::{Path, PathBuf};

use log::warn;
use rt_auth::{Actor, Claims};

/// The persisted [`Actor`] for this config directory.
///
/// The session file and the in-memory actor change together: a credential
/// is written only after it decodes, and a stored credential that no longer
/// decodes (or has expired) is removed on open.
#[derive(Debug)]
pub struct Session {
    path: PathBuf,
    actor: Actor,
}

impl Session {
    pub fn open(path: impl Into<PathBuf>) -> CliErrorResult<Self> {
        let path = path.into();
        let loaded = session_file::load_or_recover(&path)?;
        let stored = loaded.credential().map(String::from);
        let had_credential = stored.is_some();

        let actor = Actor::restore(stored);

        if had_credential && !actor.is_authenticated() {
            warn!("Stored session is no longer usable; logging out");
            session_file::clear(&path)?;
        }

        Ok(Self { path, actor })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    /// Adopt `credential` and persist it.
    ///
    /// A credential that does not decode logs the session out.
    pub fn login(&mut self, credential: &str) -> CliErrorResult<Claims> {
        let claims = match self.actor.login(credential) {
            Ok(claims) => claims.clone(),
            Err(e) => {
                session_file::clear(&self.path)?;
                return Err(e.into());
            }
        };

        session_file::save(&self.path, credential)?;
        Ok(claims)
    }

    /// Returns whether a stored session was removed.
    pub fn logout(&mut self) -> CliErrorResult<bool> {
        self.actor.logout();
        Ok(session_file::clear(&self.path)?)
    }
}
