use crate::helpers::{PHONE, conversation_ok_body, seeded_client_for};

use models::{C2bCommandId, C2bRegisterRequest, C2bRequest, C2bResponseType};

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const C2B_PATH: &str = "/mpesa/c2b/v1/registerurl";

#[tokio::test]
async fn given_register_request_when_sent_then_decodes_misspelled_originator_key() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(C2B_PATH))
        .and(body_partial_json(json!({
            "ShortCode": "600984",
            "ResponseType": "Completed",
            "ConfirmationURL": "https://example.com/confirmation",
            "ValidationURL": "https://example.com/validation"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "OriginatorCoversationID": "7619-37765134-1",
            "ResponseCode": "0",
            "ResponseDescription": "success"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = seeded_client_for(&server.uri(), "tok1");
    let request = C2bRegisterRequest::new(
        "600984",
        C2bResponseType::Completed,
        "https://example.com/confirmation",
        "https://example.com/validation",
    );

    // WHEN
    let response = client.register_c2b_urls(&request).await.unwrap();

    // THEN
    assert_eq!(response.originator_conversation_id, "7619-37765134-1");
    assert_eq!(response.response_description, "success");
}

/// **VALUE**: C2B transactions are posted to the registration path.
///
/// **WHY THIS MATTERS**: The gateway serves both from the same URL. "Fixing"
/// the path to a dedicated simulate endpoint would break against it.
#[tokio::test]
async fn given_c2b_transaction_when_sent_then_uses_registration_path() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(C2B_PATH))
        .and(body_partial_json(json!({
            "CommandID": "CustomerPayBillOnline",
            "Msisdn": PHONE,
            "BillRefNumber": "account-1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(conversation_ok_body()))
        .expect(1)
        .mount(&server)
        .await;
    let client = seeded_client_for(&server.uri(), "tok1");
    let request = C2bRequest::new(
        "600984",
        C2bCommandId::CustomerPayBillOnline,
        "1",
        PHONE,
        "account-1",
    );

    // WHEN
    let response = client.initiate_c2b_transaction(&request).await.unwrap();

    // THEN
    assert_eq!(response.response_code, "0");
}
