//! Which records an actor may see.
//!
//! ADMIN and MEMBER (and UNKNOWN) see everything. A PI sees only records it
//! owns; a record whose owner cannot be resolved is withheld.

use crate::{Claims, Role};

use rt_core::{OwnedRecord, OwnerRef};

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewScope {
    All,
    Owned,
}

impl ViewScope {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Pi => Self::Owned,
            Role::Admin | Role::Member | Role::Unknown => Self::All,
        }
    }
}

/// Does `owner` refer to the actor described by `claims`?
///
/// Exactly one comparison path is taken, chosen by the owner's shape:
/// a nested id is compared to `user_id`, a nested username (only when there
/// is no nested id) to `subject`, and a flat id to `user_id` then `subject`.
pub fn owns(claims: &Claims, owner: &OwnerRef) -> bool {
    let user_id = claims.user_id.as_deref();

    match owner {
        OwnerRef::Nested { id: Some(id), .. } => user_id == Some(id.as_str()),
        OwnerRef::Nested {
            id: None,
            username: Some(username),
        } => claims.subject == *username,
        OwnerRef::Flat(id) => user_id == Some(id.as_str()) || claims.subject == *id,
        OwnerRef::Nested {
            id: None,
            username: None,
        }
        | OwnerRef::Missing => false,
    }
}

pub fn is_visible<R: OwnedRecord>(claims: &Claims, record: &R) -> bool {
    match ViewScope::for_role(claims.role) {
        ViewScope::All => true,
        ViewScope::Owned => owns(claims, record.owner()),
    }
}

/// The subset of `records` visible to `claims`, in input order.
pub fn visible_records<R: OwnedRecord + Clone>(claims: &Claims, records: &[R]) -> Vec<R> {
    if ViewScope::for_role(claims.role) == ViewScope::All {
        return records.to_vec();
    }

    let visible: Vec<R> = records
        .iter()
        .filter(|record| is_visible(claims, *record))
        .cloned()
        .collect();

    debug!(
        "View filter for {} ({}): {} of {} records visible",
        claims.subject,
        claims.role,
        visible.len(),
        records.len()
    );

    visible
}
