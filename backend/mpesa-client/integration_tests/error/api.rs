use crate::helpers::{STK_PUSH_PATH, sample_stk_push, seeded_client_for};

use mpesa_client::MpesaClientError;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_answering(template: ResponseTemplate) -> (MockServer, mpesa_client::MpesaClient) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(STK_PUSH_PATH))
        .respond_with(template)
        .expect(1)
        .mount(&server)
        .await;
    let client = seeded_client_for(&server.uri(), "tok1");
    (server, client)
}

/// **VALUE**: Structured gateway errors reach the caller field for field.
///
/// **WHY THIS MATTERS**: Callers branch on `errorCode` (e.g. `500.001.1001`
/// "unable to lock subscriber") to decide what to tell the customer.
#[tokio::test]
async fn given_structured_503_when_calling_then_error_carries_decoded_fields() {
    // GIVEN
    let (_server, client) = client_answering(ResponseTemplate::new(503).set_body_json(json!({
        "requestId": "12345",
        "errorCode": "503.001.01",
        "errorMessage": "Service is currently under maintenance"
    })))
    .await;

    // WHEN
    let error = client
        .initiate_stk_push(&sample_stk_push())
        .await
        .unwrap_err();

    // THEN
    match error {
        MpesaClientError::Api {
            status_code, error, ..
        } => {
            assert_eq!(status_code.0, 503);
            assert_eq!(error.request_id.as_deref(), Some("12345"));
            assert_eq!(error.error_code, "503.001.01");
            assert_eq!(error.error_message, "Service is currently under maintenance");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

/// **VALUE**: Non-JSON error bodies still produce a typed Api error.
///
/// **BUG THIS CATCHES**: Proxies and load balancers in front of the gateway
/// answer with HTML or plain text. Surfacing that as a decode error would hide
/// the status code.
#[tokio::test]
async fn given_unstructured_503_when_calling_then_error_is_synthesized_from_status() {
    // GIVEN
    let (_server, client) =
        client_answering(ResponseTemplate::new(503).set_body_string("Normal string")).await;

    // WHEN
    let error = client
        .initiate_stk_push(&sample_stk_push())
        .await
        .unwrap_err();

    // THEN
    assert_eq!(error.status_code(), Some(503));
    let response = error.error_response().unwrap();
    assert_eq!(response.error_code, "503");
    assert_eq!(response.error_message, "Service Unavailable");
    assert_eq!(error.error_category(), "server_error");
}

#[tokio::test]
async fn given_bad_request_with_empty_body_when_calling_then_uses_reason_phrase() {
    let (_server, client) = client_answering(ResponseTemplate::new(400)).await;

    let error = client
        .initiate_stk_push(&sample_stk_push())
        .await
        .unwrap_err();

    let response = error.error_response().unwrap();
    assert_eq!(response.error_code, "400");
    assert_eq!(response.error_message, "Bad Request");
}

#[tokio::test]
async fn given_200_with_wrong_schema_when_calling_then_returns_decode_error() {
    // GIVEN
    let (_server, client) = client_answering(
        ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })),
    )
    .await;

    // WHEN
    let error = client
        .initiate_stk_push(&sample_stk_push())
        .await
        .unwrap_err();

    // THEN
    assert!(matches!(error, MpesaClientError::Decode { .. }));
    assert_eq!(error.status_code(), Some(200));
    assert!(error.error_response().is_none());
}
