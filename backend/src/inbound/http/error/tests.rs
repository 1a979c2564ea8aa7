//! Tests for HTTP error mapping.

use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use rstest::{fixture, rstest};
use serde_json::json;

use super::*;
use crate::domain::Error;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[fixture]
fn internal_error_case(expected_trace_id: String) -> Error {
    Error::internal("bus repository query failed: relation \"buses\" does not exist")
        .with_trace_id(expected_trace_id)
        .with_details(json!({"table": "buses"}))
}

#[fixture]
fn seats_unavailable_case(expected_trace_id: String) -> Error {
    Error::seats_unavailable("Seats are unavailable")
        .with_trace_id(expected_trace_id)
        .with_details(json!({"busId": 1}))
}

#[rstest]
#[case(Error::invalid_request("Invalid form data"), StatusCode::BAD_REQUEST)]
#[case(Error::seats_unavailable("Seats are unavailable"), StatusCode::BAD_REQUEST)]
#[case(Error::unauthorized("Invalid admission number or password"), StatusCode::UNAUTHORIZED)]
#[case(Error::conflict("Admission number already registered"), StatusCode::CONFLICT)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] err: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&err), status);
}

async fn assert_error_response(
    error: Error,
    expected_status: StatusCode,
    expected_trace_id: Option<&str>,
) -> Error {
    let response = ResponseError::error_response(&error);
    assert_eq!(response.status(), expected_status);

    let header = response.headers().get(TRACE_ID_HEADER);
    match expected_trace_id {
        Some(expected) => {
            let trace_id = header
                .expect("trace-id header is set by error_response")
                .to_str()
                .expect("trace-id is valid UTF-8");
            assert_eq!(trace_id, expected);
        }
        None => assert!(header.is_none(), "trace-id header should not be present"),
    }

    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");

    serde_json::from_slice(&bytes).expect("Error JSON deserialisation succeeds")
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted_but_keep_trace_id(
    #[from(internal_error_case)] internal_error: Error,
    expected_trace_id: String,
) {
    let redacted = assert_error_response(
        internal_error,
        StatusCode::INTERNAL_SERVER_ERROR,
        Some(expected_trace_id.as_str()),
    )
    .await;
    assert_eq!(redacted.code(), ErrorCode::InternalError);
    assert_eq!(redacted.message(), INTERNAL_ERROR_MESSAGE);
    assert!(redacted.details().is_none());
}

#[rstest]
#[actix_web::test]
async fn client_errors_keep_message_and_details(
    #[from(seats_unavailable_case)] seats_unavailable: Error,
    expected_trace_id: String,
) {
    let payload = assert_error_response(
        seats_unavailable,
        StatusCode::BAD_REQUEST,
        Some(expected_trace_id.as_str()),
    )
    .await;
    assert_eq!(payload.code(), ErrorCode::SeatsUnavailable);
    assert_eq!(payload.message(), "Seats are unavailable");
    assert_eq!(payload.details(), Some(&json!({"busId": 1})));
}

#[rstest]
#[actix_web::test]
async fn error_without_trace_id_omits_trace_header() {
    let error = Error::conflict("Admission number already registered");

    let payload = assert_error_response(error, StatusCode::CONFLICT, None).await;
    assert_eq!(payload.code(), ErrorCode::Conflict);
    assert_eq!(payload.trace_id(), None);
}

#[rstest]
fn from_actix_error_is_redacted_internal_error() {
    let err: Error = actix_web::error::ErrorBadRequest("boom").into();

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.message(), INTERNAL_ERROR_MESSAGE);
    assert_eq!(err.details(), None);
}
