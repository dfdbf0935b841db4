pub mod actor;
pub mod capability;
pub mod claims;
pub mod decoder;
pub mod error;
pub mod role;
pub mod view_filter;

pub use actor::Actor;
pub use capability::{Capability, CapabilitySet, capabilities_for};
pub use claims::Claims;
pub use decoder::decode;
pub use error::{AccessError, AccessResult, DecodeError, DecodeResult};
pub use role::Role;
pub use view_filter::{ViewScope, is_visible, owns, visible_records};

#[cfg(test)]
mod tests;
