//! Tests for the domain error payload.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::unauthorized("nope"), ErrorCode::Unauthorized)]
#[case(Error::seats_unavailable("full"), ErrorCode::SeatsUnavailable)]
#[case(Error::conflict("taken"), ErrorCode::Conflict)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn serialises_camel_case_and_skips_empty_fields() {
    let value = serde_json::to_value(Error::invalid_request("invalid form data"))
        .expect("error serialises");
    assert_eq!(
        value,
        json!({ "code": "invalid_request", "message": "invalid form data" })
    );
}

#[rstest]
fn serialises_trace_id_and_details() {
    let error = Error::seats_unavailable("seats are unavailable")
        .with_trace_id("00000000-0000-0000-0000-000000000000")
        .with_details(json!({ "busId": 7 }));
    let value = serde_json::to_value(&error).expect("error serialises");
    assert_eq!(value["code"], "seats_unavailable");
    assert_eq!(value["traceId"], "00000000-0000-0000-0000-000000000000");
    assert_eq!(value["details"]["busId"], 7);
}

#[tokio::test]
async fn captures_trace_id_in_scope() {
    let trace_id = TraceId::generate();
    let error = TraceId::scope(trace_id, async { Error::internal("boom") }).await;
    assert_eq!(error.trace_id(), Some(trace_id.to_string().as_str()));
}

#[rstest]
fn display_uses_message() {
    assert_eq!(Error::conflict("taken").to_string(), "taken");
}
