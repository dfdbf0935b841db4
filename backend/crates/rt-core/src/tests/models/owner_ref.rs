use crate::OwnerRef;

use serde_json::json;

#[test]
fn given_nested_owner_object_when_normalized_then_nested() {
    let record = json!({ "pi": { "id": "u1", "username": "alice" } });

    let owner = OwnerRef::from_record(&record, "pi", "piId");

    assert_eq!(
        owner,
        OwnerRef::Nested {
            id: Some("u1".to_string()),
            username: Some("alice".to_string()),
        }
    );
}

#[test]
fn given_nested_object_with_numeric_id_when_normalized_then_id_is_decimal_string() {
    let record = json!({ "pi": { "id": 42 } });

    let owner = OwnerRef::from_record(&record, "pi", "piId");

    assert_eq!(
        owner,
        OwnerRef::Nested {
            id: Some("42".to_string()),
            username: None,
        }
    );
}

#[test]
fn given_bare_id_in_owner_field_when_normalized_then_flat() {
    let record = json!({ "pi": "u7" });

    let owner = OwnerRef::from_record(&record, "pi", "piId");

    assert_eq!(owner, OwnerRef::Flat("u7".to_string()));
}

#[test]
fn given_only_flat_id_field_when_normalized_then_flat() {
    let record = json!({ "piId": 9 });

    let owner = OwnerRef::from_record(&record, "pi", "piId");

    assert_eq!(owner, OwnerRef::Flat("9".to_string()));
}

#[test]
fn given_nested_object_and_flat_field_when_normalized_then_nested_wins() {
    let record = json!({ "pi": { "username": "alice" }, "piId": "u1" });

    let owner = OwnerRef::from_record(&record, "pi", "piId");

    assert_eq!(
        owner,
        OwnerRef::Nested {
            id: None,
            username: Some("alice".to_string()),
        }
    );
}

#[test]
fn given_null_owner_and_flat_field_when_normalized_then_flat_field_used() {
    let record = json!({ "pi": null, "piId": "u1" });

    let owner = OwnerRef::from_record(&record, "pi", "piId");

    assert_eq!(owner, OwnerRef::Flat("u1".to_string()));
}

#[test]
fn given_empty_strings_when_normalized_then_missing() {
    let record = json!({ "pi": "", "piId": "" });

    let owner = OwnerRef::from_record(&record, "pi", "piId");

    assert!(owner.is_missing());
}

#[test]
fn given_no_owner_fields_when_normalized_then_missing() {
    let owner = OwnerRef::from_record(&json!({ "id": 1 }), "pi", "piId");

    assert_eq!(owner, OwnerRef::Missing);
}

#[test]
fn test_owner_ref_serializes_with_shape_tag() {
    let flat = serde_json::to_value(OwnerRef::Flat("u1".to_string())).unwrap();
    assert_eq!(flat, json!({ "shape": "flat", "value": "u1" }));

    let missing = serde_json::to_value(OwnerRef::Missing).unwrap();
    assert_eq!(missing, json!({ "shape": "missing" }));
}
