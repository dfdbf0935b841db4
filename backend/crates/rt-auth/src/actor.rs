use crate::{
    AccessError, AccessResult, Capability, CapabilitySet, Claims, DecodeError, DecodeResult, Role,
    decode, visible_records,
};

use rt_core::OwnedRecord;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};

/// The current session: a credential and the claims decoded from it.
///
/// Login, logout and restore are the only writers. The credential and the
/// claims are always set or cleared together; a failed decode never leaves
/// partial state behind.
#[derive(Clone, Default)]
pub struct Actor {
    credential: Option<String>,
    claims: Option<Claims>,
}

impl Actor {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Rebuild the session from a persisted credential at startup.
    ///
    /// An undecodable or already-expired credential yields an anonymous actor.
    pub fn restore(credential: Option<String>) -> Self {
        Self::restore_at(credential, Utc::now())
    }

    pub fn restore_at(credential: Option<String>, now: DateTime<Utc>) -> Self {
        let Some(credential) = credential else {
            return Self::anonymous();
        };

        let claims = match decode(&credential) {
            Ok(claims) => claims,
            Err(e) => {
                warn!("Discarding persisted credential: {e}");
                return Self::anonymous();
            }
        };

        if claims.is_expired(now) {
            warn!("Persisted credential for {} has expired", claims.subject);
            return Self::anonymous();
        }

        debug!("Restored session for {} ({})", claims.subject, claims.role);
        Self {
            credential: Some(credential),
            claims: Some(claims),
        }
    }

    /// Replace the session with `credential`.
    ///
    /// An expired credential is rejected like an undecodable one. On failure
    /// the previous session is cleared as well.
    #[track_caller]
    pub fn login(&mut self, credential: impl Into<String>) -> DecodeResult<&Claims> {
        self.login_at(credential, Utc::now())
    }

    #[track_caller]
    pub fn login_at(
        &mut self,
        credential: impl Into<String>,
        now: DateTime<Utc>,
    ) -> DecodeResult<&Claims> {
        let credential = credential.into();

        let claims = match decode(&credential) {
            Ok(claims) if claims.is_expired(now) => Err(DecodeError::expired(claims.subject)),
            other => other,
        };

        match claims {
            Ok(claims) => {
                info!("Logged in as {} ({})", claims.subject, claims.role);
                self.credential = Some(credential);
                Ok(&*self.claims.insert(claims))
            }
            Err(e) => {
                self.logout();
                Err(e)
            }
        }
    }

    pub fn logout(&mut self) {
        self.credential = None;
        self.claims = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.claims.is_some()
    }

    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    pub fn claims(&self) -> Option<&Claims> {
        self.claims.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.claims.as_ref().map(|claims| claims.role)
    }

    /// `Authorization` header value for the current credential.
    pub fn bearer(&self) -> Option<String> {
        self.credential
            .as_ref()
            .map(|credential| format!("Bearer {credential}"))
    }

    pub fn acting_user_id(&self) -> Option<&str> {
        self.claims.as_ref().map(Claims::acting_user_id)
    }

    /// Empty when not logged in.
    pub fn capabilities(&self) -> CapabilitySet {
        self.role()
            .map_or_else(CapabilitySet::empty, CapabilitySet::for_role)
    }

    pub fn can(&self, capability: Capability) -> bool {
        self.capabilities().allows(capability)
    }

    #[track_caller]
    pub fn require(&self, capability: Capability) -> AccessResult<()> {
        let Some(role) = self.role() else {
            return Err(AccessError::unauthenticated());
        };

        if CapabilitySet::for_role(role).allows(capability) {
            Ok(())
        } else {
            Err(AccessError::denied(capability, role))
        }
    }

    /// Records visible to this actor. Nothing is visible when logged out.
    pub fn visible<R: OwnedRecord + Clone>(&self, records: &[R]) -> Vec<R> {
        match &self.claims {
            Some(claims) => visible_records(claims, records),
            None => Vec::new(),
        }
    }
}

impl std::fmt::Debug for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Actor")
            .field("credential", &self.credential.as_ref().map(|_| "<redacted>"))
            .field("claims", &self.claims)
            .finish()
    }
}
