use crate::ClientError;
use crate::client::client::{api_error, credential_from_login, parse_body};

use reqwest::StatusCode;
use serde_json::{Value, json};

// =========================================================================
// Body parsing
// =========================================================================

#[test]
fn given_empty_body_when_parse_then_null() {
    assert_eq!(parse_body(""), Value::Null);
    assert_eq!(parse_body("  \n"), Value::Null);
}

#[test]
fn given_plain_text_body_when_parse_then_string() {
    assert_eq!(
        parse_body("eyJhbGciOiJIUzI1NiJ9.e30.sig"),
        Value::String("eyJhbGciOiJIUzI1NiJ9.e30.sig".to_string())
    );
}

#[test]
fn given_json_body_when_parse_then_value() {
    assert_eq!(parse_body(r#"{"id": 1}"#), json!({ "id": 1 }));
}

// =========================================================================
// Error mapping
// =========================================================================

#[test]
fn given_error_envelope_when_api_error_then_code_and_message_used() {
    let body = json!({ "error": { "code": "NOT_FOUND", "message": "Project not found" } });

    let err = api_error(StatusCode::NOT_FOUND, &body);

    assert_eq!(err.code(), Some("NOT_FOUND"));
    assert!(err.to_string().contains("Project not found"));
}

#[test]
fn given_flat_error_body_when_api_error_then_status_code_and_message() {
    let body = json!({
        "status": 403,
        "error": "Forbidden",
        "message": "Only the PI may change this project",
        "path": "/api/projects/7/status"
    });

    let err = api_error(StatusCode::FORBIDDEN, &body);

    assert_eq!(err.code(), Some("403"));
    assert!(err.to_string().contains("Only the PI may change this project"));
}

#[test]
fn given_flat_error_without_message_when_api_error_then_error_string_used() {
    let body = json!({ "status": 401, "error": "Unauthorized", "message": "" });

    let err = api_error(StatusCode::UNAUTHORIZED, &body);

    assert!(err.to_string().contains("Unauthorized"));
}

#[test]
fn given_text_body_when_api_error_then_text_is_message() {
    let err = api_error(
        StatusCode::BAD_REQUEST,
        &Value::String("Invalid username or password!".to_string()),
    );

    assert_eq!(err.code(), Some("400"));
    assert!(err.to_string().contains("Invalid username or password!"));
}

#[test]
fn given_empty_body_when_api_error_then_reason_phrase() {
    let err = api_error(StatusCode::INTERNAL_SERVER_ERROR, &Value::Null);

    assert!(err.to_string().contains("Internal Server Error"));
}

// =========================================================================
// Login responses
// =========================================================================

#[test]
fn given_string_body_when_credential_from_login_then_trimmed_credential() {
    let credential = credential_from_login(&json!("  aaa.bbb.ccc\n")).unwrap();
    assert_eq!(credential, "aaa.bbb.ccc");
}

#[test]
fn given_token_object_when_credential_from_login_then_token_used() {
    let credential = credential_from_login(&json!({ "accessToken": "aaa.bbb.ccc" })).unwrap();
    assert_eq!(credential, "aaa.bbb.ccc");
}

#[test]
fn given_unusable_body_when_credential_from_login_then_error() {
    for body in [Value::Null, json!(""), json!({ "user": "alice" }), json!(42)] {
        let result = credential_from_login(&body);
        assert!(matches!(
            result,
            Err(ClientError::Api { ref code, .. }) if code == "INVALID_LOGIN_RESPONSE"
        ));
    }
}
