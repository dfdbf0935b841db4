use crate::value::{field_bool, field_date, field_string};
use crate::{
    CoreError, FromJsonRecord, OwnedRecord, OwnerRef, RecordKind, Result as CoreErrorResult,
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A dated checkpoint within a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub is_completed: bool,
    pub project_id: Option<String>,
    pub project_title: Option<String>,
    /// The user who created the milestone
    pub owner: OwnerRef,
}

impl FromJsonRecord for Milestone {
    const KIND: RecordKind = RecordKind::Milestone;

    #[track_caller]
    fn from_json(value: &Value) -> CoreErrorResult<Self> {
        if !value.is_object() {
            return Err(CoreError::not_an_object(Self::KIND));
        }

        let id = field_string(value, "id")
            .ok_or_else(|| CoreError::missing_field(Self::KIND, "id"))?;
        let project = value.get("project");

        Ok(Self {
            id,
            title: field_string(value, "title").unwrap_or_default(),
            description: field_string(value, "description"),
            due_date: field_date(value, "dueDate"),
            is_completed: field_bool(value, "isCompleted"),
            project_id: project
                .and_then(|p| field_string(p, "id"))
                .or_else(|| field_string(value, "projectId")),
            project_title: project.and_then(|p| field_string(p, "title")),
            owner: OwnerRef::from_record(value, "createdBy", "createdById"),
        })
    }
}

impl OwnedRecord for Milestone {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn owner(&self) -> &OwnerRef {
        &self.owner
    }
}
