mod document;
mod milestone;
mod owned_record;
mod owner_ref;
mod project;
mod project_status;
