use crate::{CoreError, FromJsonRecord, OwnedRecord, OwnerRef, Project, ProjectStatus};

use chrono::NaiveDate;
use serde_json::json;

#[test]
fn test_project_from_json_full_payload() {
    let value = json!({
        "id": 1,
        "title": "Coral Reef Survey",
        "summary": "Long-term reef monitoring",
        "status": "ACTIVE",
        "pi": { "id": "u1", "username": "alice", "fullName": "Alice A." },
        "tags": "marine, biology,, survey ",
        "startDate": "2024-01-15",
        "endDate": "2025-06-30",
        "members": [
            { "id": "u2", "username": "bob" },
            { "fullName": "No Identity" },
            "not-an-object"
        ]
    });

    let project = Project::from_json(&value).unwrap();

    assert_eq!(project.record_id(), "1");
    assert_eq!(project.title, "Coral Reef Survey");
    assert_eq!(project.summary.as_deref(), Some("Long-term reef monitoring"));
    assert_eq!(project.status, ProjectStatus::Active);
    assert_eq!(
        project.owner(),
        &OwnerRef::Nested {
            id: Some("u1".to_string()),
            username: Some("alice".to_string()),
        }
    );
    assert_eq!(project.owner_username.as_deref(), Some("alice"));
    assert_eq!(project.tags, vec!["marine", "biology", "survey"]);
    assert_eq!(project.start_date, NaiveDate::from_ymd_opt(2024, 1, 15));
    assert_eq!(project.end_date, NaiveDate::from_ymd_opt(2025, 6, 30));
    assert_eq!(project.members.len(), 1);
    assert_eq!(project.members[0].username.as_deref(), Some("bob"));
}

#[test]
fn test_project_summary_falls_back_to_description() {
    let value = json!({ "id": "p1", "description": "Legacy field" });

    let project = Project::from_json(&value).unwrap();

    assert_eq!(project.summary.as_deref(), Some("Legacy field"));
}

#[test]
fn test_project_minimal_payload_uses_defaults() {
    let project = Project::from_json(&json!({ "id": "p1" })).unwrap();

    assert_eq!(project.title, "");
    assert!(project.summary.is_none());
    assert_eq!(project.status, ProjectStatus::Unknown(String::new()));
    assert_eq!(project.owner, OwnerRef::Missing);
    assert!(project.tags.is_empty());
    assert!(project.start_date.is_none());
    assert!(project.members.is_empty());
}

#[test]
fn test_project_timestamp_dates_are_truncated_to_day() {
    let value = json!({ "id": "p1", "startDate": "2024-03-01T09:30:00Z", "endDate": "soon" });

    let project = Project::from_json(&value).unwrap();

    assert_eq!(project.start_date, NaiveDate::from_ymd_opt(2024, 3, 1));
    assert!(project.end_date.is_none());
}

#[test]
fn test_project_without_id_is_rejected() {
    let result = Project::from_json(&json!({ "title": "Nameless" }));

    assert!(matches!(
        result,
        Err(CoreError::MissingField { field: "id", .. })
    ));
}

#[test]
fn test_project_non_object_is_rejected() {
    let result = Project::from_json(&json!("p1"));

    assert!(matches!(result, Err(CoreError::NotAnObject { .. })));
}

#[test]
fn test_parse_tags() {
    assert_eq!(Project::parse_tags("a, b ,c"), vec!["a", "b", "c"]);
    assert!(Project::parse_tags(" , ").is_empty());
}
