//! Ownership reference carried by every owned record.

use crate::value::{field_string, scalar_string};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Who owns a record, resolved once when the record is decoded.
///
/// The backend has sent three shapes over time: a nested user object, a flat
/// id next to the record's other fields, and (deprecated) a bare id in the
/// field that normally holds the user object. All three collapse into this
/// enum so ownership checks never inspect raw JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", content = "value", rename_all = "snake_case")]
pub enum OwnerRef {
    /// Nested user object. Either field may be absent.
    Nested {
        id: Option<String>,
        username: Option<String>,
    },
    /// Bare id, from a flat id field or the deprecated bare-id shape.
    Flat(String),
    /// No ownership information at all.
    Missing,
}

impl OwnerRef {
    /// Normalize ownership from a record's object-typed owner field and its
    /// flat id field.
    ///
    /// The object-typed field is consulted first: an object becomes `Nested`,
    /// a bare scalar becomes `Flat`. Only when it is absent or null does the
    /// flat id field apply.
    pub fn from_fields(object_field: Option<&Value>, flat_field: Option<&Value>) -> Self {
        if let Some(nested @ Value::Object(_)) = object_field {
            return Self::Nested {
                id: field_string(nested, "id"),
                username: field_string(nested, "username"),
            };
        }

        match object_field
            .and_then(scalar_string)
            .or_else(|| flat_field.and_then(scalar_string))
        {
            Some(id) => Self::Flat(id),
            None => Self::Missing,
        }
    }

    /// Build from a record object using its owner field names.
    pub fn from_record(record: &Value, object_key: &str, flat_key: &str) -> Self {
        Self::from_fields(record.get(object_key), record.get(flat_key))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}
