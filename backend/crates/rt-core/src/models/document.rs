use crate::value::{field_string, first_field_string};
use crate::{
    CoreError, FromJsonRecord, OwnedRecord, OwnerRef, RecordKind, Result as CoreErrorResult,
};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A link to an external file attached to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub url_or_path: Option<String>,
    pub project_id: Option<String>,
    pub project_title: Option<String>,
    /// The user who uploaded the document
    pub owner: OwnerRef,
    pub uploaded_by_username: Option<String>,
}

impl FromJsonRecord for Document {
    const KIND: RecordKind = RecordKind::Document;

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
            url_or_path: first_field_string(value, &["urlOrPath", "url"]),
            project_id: project
                .and_then(|p| field_string(p, "id"))
                .or_else(|| field_string(value, "projectId")),
            project_title: project.and_then(|p| field_string(p, "title")),
            owner: OwnerRef::from_record(value, "uploadedBy", "uploadedById"),
            uploaded_by_username: value
                .get("uploadedBy")
                .and_then(|user| field_string(user, "username")),
        })
    }
}

impl OwnedRecord for Document {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn owner(&self) -> &OwnerRef {
        &self.owner
    }
}
