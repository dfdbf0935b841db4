pub mod document;
pub mod milestone;
pub mod owned_record;
pub mod owner_ref;
pub mod project;
pub mod project_status;
pub mod record_kind;
pub mod user_ref;
