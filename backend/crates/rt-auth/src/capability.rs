//! Role-derived UI capabilities.

use crate::Role;

use serde::{Deserialize, Serialize, Serializer};

/// A UI action that is offered or withheld based on role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Capability {
    CreateProject,
    DeleteProject,
    UpdateProjectStatus,
    CreateMilestone,
    CompleteMilestone,
    DeleteMilestone,
    UploadDocument,
    DeleteDocument,
}

impl Capability {
    pub const ALL: [Capability; 8] = [
        Self::CreateProject,
        Self::DeleteProject,
        Self::UpdateProjectStatus,
        Self::CreateMilestone,
        Self::CompleteMilestone,
        Self::DeleteMilestone,
        Self::UploadDocument,
        Self::DeleteDocument,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateProject => "createProject",
            Self::DeleteProject => "deleteProject",
            Self::UpdateProjectStatus => "updateProjectStatus",
            Self::CreateMilestone => "createMilestone",
            Self::CompleteMilestone => "completeMilestone",
            Self::DeleteMilestone => "deleteMilestone",
            Self::UploadDocument => "uploadDocument",
            Self::DeleteDocument => "deleteDocument",
        }
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }

    /// The closed policy table.
    fn granted_to(self, role: Role) -> bool {
        matches!(
            (role, self),
            (Role::Admin, _)
                | (
                    Role::Pi,
                    Self::UpdateProjectStatus
                        | Self::CreateMilestone
                        | Self::CompleteMilestone
                        | Self::UploadDocument
                )
        )
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable set of capabilities, recomputed whenever the role changes.
///
/// Serializes as a map of every capability name to whether it is granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CapabilitySet {
    bits: u8,
}

impl CapabilitySet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn for_role(role: Role) -> Self {
        let bits = Capability::ALL
            .iter()
            .filter(|cap| cap.granted_to(role))
            .fold(0, |bits, cap| bits | cap.bit());
        Self { bits }
    }

    pub fn allows(&self, capability: Capability) -> bool {
        self.bits & capability.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Granted capabilities in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        Capability::ALL
            .into_iter()
            .filter(move |cap| self.allows(*cap))
    }
}

impl Serialize for CapabilitySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            Capability::ALL
                .iter()
                .map(|cap| (cap.as_str(), self.allows(*cap))),
        )
    }
}

/// Capabilities granted to `role`. MEMBER and UNKNOWN get none.
pub fn capabilities_for(role: Role) -> CapabilitySet {
    CapabilitySet::for_role(role)
}
