//! Tests for HTTP error mapping.

use actix_web::body::to_bytes;
use actix_web::test::TestRequest;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;

async fn body_of(response: HttpResponse) -> Value {
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("error JSON")
}

#[rstest]
#[case(Error::invalid_request("username is required"))]
#[case(Error::not_found("user 1 not found"))]
#[case(Error::service_unavailable("database down"))]
#[case(Error::internal("boom"))]
fn every_code_answers_ok(#[case] error: Error) {
    assert_eq!(ResponseError::status_code(&error), StatusCode::OK);
}

#[rstest]
#[case(Error::invalid_request("Invalid Date"), json!({"error": "Invalid Date"}))]
#[case(Error::not_found("user 42 not found"), json!({"error": "user 42 not found"}))]
#[case(
    Error::service_unavailable("user repository unavailable: refused"),
    json!({"error": "user repository unavailable: refused"})
)]
#[actix_web::test]
async fn client_visible_errors_keep_their_message(#[case] error: Error, #[case] expected: Value) {
    let response = ResponseError::error_response(&error);
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_of(response).await, expected);
}

#[actix_web::test]
async fn internal_errors_are_redacted() {
    let error = Error::internal("exercise repository error: relation does not exist");
    let response = ResponseError::error_response(&error);
    assert_eq!(
        body_of(response).await,
        json!({"error": "Internal server error"})
    );
}

#[actix_web::test]
async fn extraction_failures_become_invalid_requests() {
    let req = TestRequest::default().to_http_request();
    let err = extraction_error_handler("expected `=`", &req);
    let response = err.error_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_of(response).await;
    assert_eq!(body, json!({"error": "malformed request: expected `=`"}));
}
