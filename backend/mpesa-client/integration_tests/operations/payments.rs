use crate::helpers::{
    PHONE, SHORT_CODE, STK_PUSH_PATH, conversation_ok_body, sample_stk_push, seeded_client_for,
    stk_ok_body,
};

use models::{B2cCommandId, B2cRequest};

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: The STK push body reaches the gateway with upstream field names
/// and the derived password.
#[tokio::test]
async fn given_stk_push_when_sent_then_body_uses_upstream_field_names() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(STK_PUSH_PATH))
        .and(header("Content-Type", "application/json"))
        .and(body_partial_json(json!({
            "BusinessShortCode": SHORT_CODE,
            "Password": "MTc0Mzc5YmZiMjc5ZjlhYTliZGJjZjE1OGU5N2RkNzFhNDY3Y2QyZTBjODkzMDU5YjEwZjc4ZTZiNzJhZGExZWQyYzkxOTIwMjMxMjMwMTU0NTEy",
            "Timestamp": "20231230154512",
            "TransactionType": "CustomerPayBillOnline",
            "PartyA": PHONE,
            "PartyB": SHORT_CODE,
            "PhoneNumber": PHONE,
            "CallBackURL": "https://example.com/callback"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(stk_ok_body()))
        .expect(1)
        .mount(&server)
        .await;
    let client = seeded_client_for(&server.uri(), "tok1");

    // WHEN
    let response = client.initiate_stk_push(&sample_stk_push()).await.unwrap();

    // THEN
    assert_eq!(response.merchant_request_id, "29115-34620561-1");
    assert_eq!(
        response.customer_message,
        "Success. Request accepted for processing"
    );
}

#[tokio::test]
async fn given_b2c_request_when_sent_then_posts_to_payment_request_with_numeric_amount() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/mpesa/b2c/v1/paymentrequest"))
        .and(body_partial_json(json!({
            "InitiatorName": "testapi",
            "CommandID": "BusinessPayment",
            "Amount": 10.0,
            "PartyA": "600996",
            "PartyB": PHONE
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(conversation_ok_body()))
        .expect(1)
        .mount(&server)
        .await;
    let client = seeded_client_for(&server.uri(), "tok1");
    let request = B2cRequest::new(
        "testapi",
        "encrypted-credential",
        B2cCommandId::BusinessPayment,
        "10",
        "600996",
        PHONE,
        "Test remarks",
        "https://example.com/b2c/timeout",
        "https://example.com/b2c/result",
        "",
    )
    .unwrap();

    // WHEN
    let response = client.initiate_b2c_transaction(&request).await.unwrap();

    // THEN
    assert_eq!(response.conversation_id, "AG_20191219_00005797af5d7d75f652");
    assert_eq!(response.originator_conversation_id, "16740-34861180-1");
}
