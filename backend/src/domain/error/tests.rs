//! Tests for the error payload formatting and constructors.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
fn invalid_request_constructor_sets_code() {
    let err = Error::invalid_request("bad");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}

#[rstest]
#[case(Error::invalid_request("x"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("x"), ErrorCode::NotFound)]
#[case(Error::service_unavailable("x"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("x"), ErrorCode::InternalError)]
fn convenience_constructors_set_expected_code(#[case] error: Error, #[case] code: ErrorCode) {
    assert_eq!(error.code(), code);
}

#[rstest]
fn try_new_rejects_empty_messages() {
    let result = Error::try_new(ErrorCode::InvalidRequest, "   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyMessage)));
}

#[rstest]
#[should_panic(expected = "error messages must satisfy validation")]
fn new_panics_on_empty_message() {
    let _ = Error::new(ErrorCode::InternalError, "");
}

#[rstest]
fn serialises_as_error_envelope_without_code() {
    let err = Error::not_found("user 42 not found");
    let value = serde_json::to_value(&err).expect("serialise error");
    assert_eq!(value, json!({ "error": "user 42 not found" }));
}

#[rstest]
fn display_uses_message() {
    assert_eq!(Error::invalid_request("Invalid Date").to_string(), "Invalid Date");
}

#[rstest]
fn code_labels_are_snake_case() {
    assert_eq!(ErrorCode::ServiceUnavailable.as_str(), "service_unavailable");
    assert_eq!(
        serde_json::to_value(ErrorCode::NotFound).expect("serialise code"),
        json!("not_found")
    );
}
