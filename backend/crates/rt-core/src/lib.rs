pub mod error;
pub mod fetch_sequence;
pub mod models;
pub mod value;

pub use error::{CoreError, Result};
pub use fetch_sequence::{FetchSequence, RequestToken};
pub use models::document::Document;
pub use models::milestone::Milestone;
pub use models::owned_record::{FromJsonRecord, OwnedRecord, decode_records};
pub use models::owner_ref::OwnerRef;
pub use models::project::Project;
pub use models::project_status::ProjectStatus;
pub use models::record_kind::RecordKind;
pub use models::user_ref::UserRef;

#[cfg(test)]
mod tests;
