use crate::{CoreError, OwnerRef, RecordKind, Result as CoreErrorResult};

use log::warn;
use serde_json::Value;

/// A record that carries a reference to the user who owns it.
pub trait OwnedRecord {
    fn record_id(&self) -> &str;
    fn owner(&self) -> &OwnerRef;
}

/// A record that can be decoded from the backend's loosely-typed JSON.
pub trait FromJsonRecord: Sized {
    const KIND: RecordKind;

    fn from_json(value: &Value) -> CoreErrorResult<Self>;
}

/// Decode a list response.
///
/// The body itself must be an array. Individual entries that fail to decode
/// are skipped with a warning so one bad row does not blank the whole list.
#[track_caller]
pub fn decode_records<R: FromJsonRecord>(body: &Value) -> CoreErrorResult<Vec<R>> {
    let entries = body
        .as_array()
        .ok_or_else(|| CoreError::not_an_array(R::KIND))?;

    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match R::from_json(entry) {
            Ok(record) => records.push(record),
            Err(e) => warn!("Skipping {} at index {index}: {e}", R::KIND),
        }
    }

    Ok(records)
}
