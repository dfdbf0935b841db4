//! Tolerant accessors over decoded JSON.
//!
//! The backend is not consistent about id types (numeric in some payloads,
//! strings in others) and occasionally sends empty strings for unset fields.
//! Everything that reads raw JSON goes through these helpers so the same
//! rules apply to token payloads and to fetched records.

use chrono::{DateTime, NaiveDate};
use serde_json::Value;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Render a JSON scalar as an identifier string.
///
/// Strings are returned verbatim unless empty, numbers in their decimal
/// form. Every other JSON type yields `None`.
pub fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Read `key` from a JSON object as an identifier string.
pub fn field_string(object: &Value, key: &str) -> Option<String> {
    object.get(key).and_then(scalar_string)
}

/// First present key wins.
pub fn first_field_string(object: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| field_string(object, key))
}

pub fn field_bool(object: &Value, key: &str) -> bool {
    object.get(key).and_then(Value::as_bool).unwrap_or(false)
}

/// Parse a calendar date from `YYYY-MM-DD` or a full RFC 3339 timestamp.
pub fn field_date(object: &Value, key: &str) -> Option<NaiveDate> {
    let raw = object.get(key).and_then(Value::as_str)?;
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
}
