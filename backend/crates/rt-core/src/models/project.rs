//! Project entity - the top-level research container.

use crate::value::{field_date, field_string, first_field_string};
use crate::{
    CoreError, FromJsonRecord, OwnedRecord, OwnerRef, ProjectStatus, RecordKind,
    Result as CoreErrorResult, UserRef,
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A research project led by a principal investigator (PI).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub summary: Option<String>,
    pub status: ProjectStatus,
    /// The PI who owns the project
    pub owner: OwnerRef,
    pub owner_username: Option<String>,
    pub tags: Vec<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub members: Vec<UserRef>,
}

impl Project {
    /// Split the backend's comma-separated tag string.
    pub fn parse_tags(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(String::from)
            .collect()
    }
}

impl FromJsonRecord for Project {
    const KIND: RecordKind = RecordKind::Project;

    #[track_caller]
    fn from_json(value: &Value) -> CoreErrorResult<Self> {
        if !value.is_object() {
            return Err(CoreError::not_an_object(Self::KIND));
        }

        let id = field_string(value, "id")
            .ok_or_else(|| CoreError::missing_field(Self::KIND, "id"))?;

        let members = value
            .get("members")
            .and_then(Value::as_array)
            .map(|users| users.iter().filter_map(UserRef::from_json).collect())
            .unwrap_or_default();

        Ok(Self {
            id,
            title: field_string(value, "title").unwrap_or_default(),
            summary: first_field_string(value, &["summary", "description"]),
            status: ProjectStatus::from_wire(value.get("status").and_then(Value::as_str)),
            owner: OwnerRef::from_record(value, "pi", "piId"),
            owner_username: value.get("pi").and_then(|pi| field_string(pi, "username")),
            tags: value
                .get("tags")
                .and_then(Value::as_str)
                .map(Self::parse_tags)
                .unwrap_or_default(),
            start_date: field_date(value, "startDate"),
            end_date: field_date(value, "endDate"),
            members,
        })
    }
}

impl OwnedRecord for Project {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn owner(&self) -> &OwnerRef {
        &self.owner
    }
}
