use crate::MpesaClientError;
use crate::mpesa_client::response::decode_body;

use models::StkPushResponse;

use reqwest::StatusCode;

const STK_OK_BODY: &str = r#"{
    "MerchantRequestID": "29115-34620561-1",
    "CheckoutRequestID": "ws_CO_191220191020363925",
    "ResponseCode": "0",
    "ResponseDescription": "Success. Request accepted for processing",
    "CustomerMessage": "Success. Request accepted for processing"
}"#;

#[test]
fn given_200_with_valid_body_when_decoding_then_returns_typed_response() {
    let response: StkPushResponse = decode_body(StatusCode::OK, STK_OK_BODY).unwrap();

    assert_eq!(response.merchant_request_id, "29115-34620561-1");
}

#[test]
fn given_200_with_wrong_schema_when_decoding_then_returns_decode_error() {
    let result: Result<StkPushResponse, _> = decode_body(StatusCode::OK, r#"{"foo":"bar"}"#);

    assert!(matches!(result, Err(MpesaClientError::Decode { .. })));
}

/// **VALUE**: 2xx codes other than 200 are not treated as success.
///
/// **BUG THIS CATCHES**: Using `is_success()` would try to decode a 202 body
/// as the operation's response and report a misleading decode error.
#[test]
fn given_202_when_decoding_then_returns_api_error() {
    let result: Result<StkPushResponse, _> = decode_body(StatusCode::ACCEPTED, STK_OK_BODY);

    let error = result.unwrap_err();
    assert_eq!(error.status_code(), Some(202));
    assert_eq!(error.error_response().unwrap().error_code, "202");
}

#[test]
fn given_structured_error_body_when_decoding_then_uses_its_fields() {
    // GIVEN
    let body = r#"{"requestId":"11728-2929992-1","errorCode":"401.002.01","errorMessage":"Error Occurred - Invalid Access Token"}"#;

    // WHEN
    let result: Result<StkPushResponse, _> = decode_body(StatusCode::BAD_REQUEST, body);

    // THEN
    let error = result.unwrap_err();
    let response = error.error_response().unwrap();
    assert_eq!(response.error_code, "401.002.01");
    assert_eq!(response.error_message, "Error Occurred - Invalid Access Token");
    assert_eq!(response.request_id.as_deref(), Some("11728-2929992-1"));
}

#[test]
fn given_plain_text_error_body_when_decoding_then_synthesizes_from_status() {
    let result: Result<StkPushResponse, _> =
        decode_body(StatusCode::SERVICE_UNAVAILABLE, "Normal string");

    let error = result.unwrap_err();
    let response = error.error_response().unwrap();
    assert_eq!(response.error_code, "503");
    assert_eq!(response.error_message, "Service Unavailable");
}

#[test]
fn given_nonstandard_status_when_decoding_then_uses_unknown_reason() {
    let status = StatusCode::from_u16(599).unwrap();

    let result: Result<StkPushResponse, _> = decode_body(status, "");

    let error = result.unwrap_err();
    assert_eq!(error.error_response().unwrap().error_message, "Unknown Status");
}
