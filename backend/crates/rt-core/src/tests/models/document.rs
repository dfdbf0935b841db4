use crate::{Document, FromJsonRecord, OwnerRef};

use serde_json::json;

#[test]
fn test_document_from_json() {
    let value = json!({
        "id": "d1",
        "title": "Ethics approval",
        "urlOrPath": "https://drive.example/ethics.pdf",
        "project": { "id": "p1", "title": "Coral Reef Survey" },
        "uploadedBy": { "id": 5, "username": "carol" }
    });

    let document = Document::from_json(&value).unwrap();

    assert_eq!(document.title, "Ethics approval");
    assert_eq!(
        document.url_or_path.as_deref(),
        Some("https://drive.example/ethics.pdf")
    );
    assert_eq!(document.project_title.as_deref(), Some("Coral Reef Survey"));
    assert_eq!(document.uploaded_by_username.as_deref(), Some("carol"));
    assert_eq!(
        document.owner,
        OwnerRef::Nested {
            id: Some("5".to_string()),
            username: Some("carol".to_string()),
        }
    );
}

#[test]
fn test_document_deprecated_bare_uploader_id() {
    let value = json!({ "id": "d2", "uploadedBy": 5, "url": "file:///tmp/a.pdf" });

    let document = Document::from_json(&value).unwrap();

    assert_eq!(document.owner, OwnerRef::Flat("5".to_string()));
    assert!(document.uploaded_by_username.is_none());
    assert_eq!(document.url_or_path.as_deref(), Some("file:///tmp/a.pdf"));
}
