use crate::ProjectStatus;

use std::str::FromStr;

#[test]
fn test_project_status_as_str() {
    assert_eq!(ProjectStatus::Planning.as_str(), "PLANNING");
    assert_eq!(ProjectStatus::OnHold.as_str(), "ON_HOLD");
    assert_eq!(ProjectStatus::Archived.as_str(), "ARCHIVED");
}

#[test]
fn test_project_status_from_str() {
    assert_eq!(
        ProjectStatus::from_str("ACTIVE").unwrap(),
        ProjectStatus::Active
    );
    assert_eq!(
        ProjectStatus::from_str("on-hold").unwrap(),
        ProjectStatus::OnHold
    );
    assert_eq!(
        ProjectStatus::from_str(" completed ").unwrap(),
        ProjectStatus::Completed
    );
    assert!(ProjectStatus::from_str("cancelled").is_err());
}

#[test]
fn test_project_status_from_wire_keeps_unknown_values() {
    assert_eq!(
        ProjectStatus::from_wire(Some("ARCHIVED")),
        ProjectStatus::Archived
    );
    assert_eq!(
        ProjectStatus::from_wire(Some("PAUSED")),
        ProjectStatus::Unknown("PAUSED".to_string())
    );
    assert_eq!(
        ProjectStatus::from_wire(None),
        ProjectStatus::Unknown(String::new())
    );
}

#[test]
fn test_project_status_serde_uses_wire_names() {
    let json = serde_json::to_string(&ProjectStatus::OnHold).unwrap();
    assert_eq!(json, "\"ON_HOLD\"");

    let parsed: ProjectStatus = serde_json::from_str("\"PAUSED\"").unwrap();
    assert_eq!(parsed, ProjectStatus::Unknown("PAUSED".to_string()));
}

#[test]
fn test_project_status_default() {
    assert_eq!(ProjectStatus::default(), ProjectStatus::Planning);
}

#[test]
fn test_selectable_statuses_exclude_unknown() {
    assert_eq!(ProjectStatus::SELECTABLE.len(), 5);
    assert!(
        ProjectStatus::SELECTABLE
            .iter()
            .all(|s| !matches!(s, ProjectStatus::Unknown(_)))
    );
}
