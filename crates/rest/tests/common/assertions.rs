//! HTTP response assertions.

use axum_test::TestResponse;
use serde_json::Value;

/// Asserts that the response has the expected status code.
pub fn assert_status(response: &TestResponse, expected: u16) {
    let actual = response.status_code().as_u16();
    assert_eq!(
        actual, expected,
        "Expected status {}, got {}",
        expected, actual
    );
}

/// Asserts that the body is an error envelope and returns its `type`.
pub fn assert_error_envelope(response: &TestResponse) -> String {
    let body: Value = response.json();
    let object = body.as_object().expect("Expected a JSON object");
    assert_eq!(object.len(), 1, "Expected only the error key, got {}", body);

    let error = body["error"]
        .as_object()
        .expect("Expected an error object");
    assert!(error["type"].is_string(), "Expected a string type");
    assert!(error["message"].is_string(), "Expected a string message");

    error["type"].as_str().unwrap_or_default().to_string()
}

/// Asserts that the body is a found document and returns its `_source`.
pub fn assert_found_document(response: &TestResponse, id: &str) -> Value {
    let body: Value = response.json();
    assert_eq!(body["found"], true, "Expected a found document, got {}", body);
    assert_eq!(body["_id"], id);
    body["_source"].clone()
}
