use crate::{FromJsonRecord, Milestone, OwnerRef};

use chrono::NaiveDate;
use serde_json::json;

#[test]
fn test_milestone_from_json() {
    let value = json!({
        "id": 10,
        "title": "Field trip",
        "description": "Collect samples",
        "dueDate": "2024-07-01",
        "isCompleted": true,
        "project": { "id": 1, "title": "Coral Reef Survey" },
        "createdBy": { "id": "u1", "username": "alice" }
    });

    let milestone = Milestone::from_json(&value).unwrap();

    assert_eq!(milestone.id, "10");
    assert_eq!(milestone.title, "Field trip");
    assert_eq!(milestone.due_date, NaiveDate::from_ymd_opt(2024, 7, 1));
    assert!(milestone.is_completed);
    assert_eq!(milestone.project_id.as_deref(), Some("1"));
    assert_eq!(milestone.project_title.as_deref(), Some("Coral Reef Survey"));
    assert_eq!(
        milestone.owner,
        OwnerRef::Nested {
            id: Some("u1".to_string()),
            username: Some("alice".to_string()),
        }
    );
}

#[test]
fn test_milestone_flat_references() {
    let value = json!({ "id": "m1", "projectId": "p9", "createdById": "u3" });

    let milestone = Milestone::from_json(&value).unwrap();

    assert!(!milestone.is_completed);
    assert_eq!(milestone.project_id.as_deref(), Some("p9"));
    assert!(milestone.project_title.is_none());
    assert_eq!(milestone.owner, OwnerRef::Flat("u3".to_string()));
}
