use crate::{CoreError, Project, decode_records};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, len};
use serde_json::json;

#[test]
fn given_array_with_bad_entries_when_decoded_then_bad_entries_skipped() {
    // Given
    let body = json!([
        { "id": "p1", "title": "First" },
        { "title": "No id" },
        42,
        { "id": "p2", "title": "Second" }
    ]);

    // When
    let projects = decode_records::<Project>(&body).unwrap();

    // Then
    assert_that!(projects, len(eq(2)));
    assert_that!(projects[0].id.as_str(), eq("p1"));
    assert_that!(projects[1].id.as_str(), eq("p2"));
}

#[test]
fn given_empty_array_when_decoded_then_empty() {
    let projects = decode_records::<Project>(&json!([])).unwrap();

    assert_that!(projects, len(eq(0)));
}

#[test]
fn given_non_array_body_when_decoded_then_error() {
    // Given
    let body = json!({ "projects": [] });

    // When
    let result = decode_records::<Project>(&body);

    // Then
    assert_that!(result, err(anything()));
    assert!(matches!(result, Err(CoreError::NotAnArray { .. })));
}
